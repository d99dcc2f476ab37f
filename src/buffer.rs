/// Largest datagram read from the socket; anything longer is truncated by
/// the kernel and will fail to decode.
pub const MAX_PACKET_LEN: usize = 4096;

pub struct PacketBuffer {
    buf: [u8; MAX_PACKET_LEN],
    len: usize,
}

impl PacketBuffer {
    pub fn new() -> Self {
        PacketBuffer {
            buf: [0u8; MAX_PACKET_LEN],
            len: 0,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(MAX_PACKET_LEN);
    }

    /// The received bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}
