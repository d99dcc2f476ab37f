use crate::error::Result;

/// Bounds-checked reader over a received datagram.
pub struct Cursor<'a> {
    buf: &'a [u8],
    current: usize,
}

impl<'a> Cursor<'a> {
    pub fn from(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            current: 0,
        }
    }

    pub fn at(&mut self, index: usize) {
        self.current = index;
    }

    #[inline]
    pub fn tmp_at<T, F: FnMut(&mut Self) -> T>(&mut self, index: usize, mut func: F) -> T {
        let current_index_saved = self.get_current_index();
        self.at(index);
        let result = func(self);
        self.at(current_index_saved);
        result
    }

    pub fn take(&mut self) -> Result<u8> {
        let result = self.peek()?;
        self.current += 1;
        Ok(result)
    }

    pub fn take_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut result = [0u8; N];
        result.copy_from_slice(self.take_slice(N)?);
        Ok(result)
    }

    pub fn take_u16(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.take_bytes()?))
    }

    pub fn peek(&self) -> Result<u8> {
        match self.buf.get(self.current) {
            Some(b) => Ok(*b),
            None => Err(format!("read past end of {} byte message", self.buf.len()).into()),
        }
    }

    pub fn get_current_index(&self) -> usize {
        self.current
    }

    pub fn take_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.current + len;
        if end > self.buf.len() {
            return Err(format!("read past end of {} byte message", self.buf.len()).into());
        }
        let result = &self.buf[self.current..end];
        self.current = end;
        Ok(result)
    }
}
