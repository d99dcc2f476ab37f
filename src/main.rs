#[macro_use]
extern crate log;

mod buffer;
mod config;
mod cursor;
mod error;
mod handler;
mod matcher;
mod protocol;
mod synthesizer;
mod zone;

use std::sync::Arc;

use simple_logger::SimpleLogger;

use crate::error::Result;
use crate::handler::HandlerContext;
use crate::zone::ZoneConfig;

//dig @::1 -p 5353 -x fe80::1
#[tokio::main]
async fn main() -> Result<()> {
    let config = config::init_from_args().await?;
    SimpleLogger::new().with_level(config.level_filter()?).init()?;
    let zone = Arc::new(ZoneConfig::from_config(&config)?);
    info!("serving {} as {}", config.network, zone);
    let context = Arc::new(HandlerContext::from(&config, zone).await?);
    info!("listening on udp {}", context.local_addr()?);
    handler::serve(context).await
}
