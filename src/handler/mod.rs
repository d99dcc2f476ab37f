use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;

use crate::buffer::PacketBuffer;
use crate::config::Config;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::protocol::{DnsQuery, DnsReply, Header, OPCODE_QUERY, RCODE_NOT_IMPLEMENTED};
use crate::zone::ZoneConfig;

mod dispatcher;

pub use dispatcher::QueryDispatcher;

pub struct HandlerContext {
    main_socket: UdpSocket,
    dispatcher: QueryDispatcher,
}

impl HandlerContext {
    pub async fn from(config: &Config, zone: Arc<ZoneConfig>) -> Result<Self> {
        let main_socket = UdpSocket::bind(config.listen.as_str()).await?;
        Ok(HandlerContext {
            main_socket,
            dispatcher: QueryDispatcher::new(zone),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.main_socket.local_addr()?)
    }

    pub async fn recv_query(&self) -> Result<(PacketBuffer, SocketAddr)> {
        let mut buffer = PacketBuffer::new();
        let (len, src) = self
            .main_socket
            .recv_from(buffer.as_mut_slice())
            .await?;
        buffer.set_len(len);
        Ok((buffer, src))
    }

    async fn back_to_client(&self, client: SocketAddr, reply: &DnsReply) -> Result<()> {
        let bytes = reply.to_u8_vec()?;
        self.main_socket
            .send_to(bytes.as_slice(), client)
            .await?;
        Ok(())
    }

    pub async fn handle_task(&self, src: SocketAddr, buffer: PacketBuffer) -> Result<()> {
        if let Some(reply) = handle_packet(&self.dispatcher, buffer.as_slice()) {
            debug!("reply to {}:\n{}", src, reply);
            self.back_to_client(src, &reply).await?;
        }
        Ok(())
    }
}

/// Applies the acceptance rules for inbound messages and dispatches the
/// ones that pass. `None` means nothing is sent back.
pub fn handle_packet(dispatcher: &QueryDispatcher, buf: &[u8]) -> Option<DnsReply> {
    let header = match Header::from(&mut Cursor::from(buf)) {
        Ok(header) => header,
        Err(e) => {
            warn!("dropping {} byte message: {}", buf.len(), e);
            return None;
        }
    };
    if header.is_response() {
        debug!("ignoring response message {}", header.id);
        return None;
    }
    let query = match DnsQuery::from(buf) {
        Ok(query) => query,
        Err(e) => {
            warn!("malformed query {}: {}", header.id, e);
            return Some(DnsReply::format_error(&header));
        }
    };
    if header.opcode() != OPCODE_QUERY {
        debug!("opcode {} not implemented for query {}", header.opcode(), header.id);
        let mut reply = DnsReply::from_query(&query);
        reply.set_rcode(RCODE_NOT_IMPLEMENTED);
        return Some(reply);
    }
    dispatcher.dispatch(&query)
}

/// Receives queries until ctrl-c, answering each one on its own task.
pub async fn serve(context: Arc<HandlerContext>) -> Result<()> {
    let accept_loop = async {
        loop {
            let (buffer, src) = match context.recv_query().await {
                Ok(received) => received,
                Err(e) => {
                    error!("receive error: {:?}", e);
                    continue;
                }
            };
            let context = context.clone();
            tokio::spawn(async move {
                if let Err(e) = context.handle_task(src, buffer).await {
                    error!("error answering {}: {}", src, e);
                }
            });
        }
    };
    tokio::select! {
        _ = accept_loop => Ok(()),
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("shutting down");
            Ok(())
        }
    }
}
