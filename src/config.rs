use std::convert::TryFrom;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use toml::Value;

use crate::error::{ConfigError, Result};

#[derive(Parser, Debug, Default)]
#[command(name = "rdns6", about = "Serves synthetic PTR, AAAA and NS records for an IPv6 subnet")]
pub struct Args {
    /// TOML file with settings; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Subnet for which to serve ip6.arpa records
    #[arg(long, value_name = "SUBNET")]
    pub network: Option<String>,
    /// Prefix for generated host names
    #[arg(long)]
    pub host_prefix: Option<String>,
    /// Domain suffix for generated host names
    #[arg(long)]
    pub domain: Option<String>,
    /// Name server for NS responses
    #[arg(long, value_name = "SERVER")]
    pub ns: Option<String>,
    /// Answer TTL in seconds
    #[arg(long, value_name = "SECONDS")]
    pub ttl: Option<u32>,
    /// DNS server listen address
    #[arg(long, value_name = "ADDRESS")]
    pub listen: Option<String>,
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub network: String,
    pub host_prefix: String,
    pub domain: String,
    pub ns: String,
    pub ttl: u32,
    pub listen: String,
    pub log_level: String,
}

impl Config {
    pub fn new() -> Self {
        Config {
            network: "fe80::/64".to_string(),
            host_prefix: "ip-".to_string(),
            domain: ".v6.example.com.".to_string(),
            ns: "ns.example.com.".to_string(),
            ttl: 3600,
            listen: "[::]:53".to_string(),
            log_level: "INFO".to_string(),
        }
    }

    pub fn merge_toml(&mut self, text: &str) -> Result<()> {
        let value: Value = toml::from_str(text)?;
        let table = value.as_table().ok_or(ConfigError::BadValue("<root>"))?;
        for (key, value) in table {
            match key.as_str() {
                "network" => self.network = string_value("network", value)?,
                "host_prefix" => self.host_prefix = string_value("host_prefix", value)?,
                "domain" => self.domain = string_value("domain", value)?,
                "ns" => self.ns = string_value("ns", value)?,
                "listen" => self.listen = string_value("listen", value)?,
                "log_level" => self.log_level = string_value("log_level", value)?,
                "ttl" => {
                    self.ttl = value
                        .as_integer()
                        .and_then(|ttl| u32::try_from(ttl).ok())
                        .ok_or(ConfigError::BadValue("ttl"))?;
                }
                other => return Err(ConfigError::UnknownKey(other.to_string()).into()),
            }
        }
        Ok(())
    }

    pub fn apply_args(&mut self, args: Args) {
        if let Some(network) = args.network {
            self.network = network;
        }
        if let Some(host_prefix) = args.host_prefix {
            self.host_prefix = host_prefix;
        }
        if let Some(domain) = args.domain {
            self.domain = domain;
        }
        if let Some(ns) = args.ns {
            self.ns = ns;
        }
        if let Some(ttl) = args.ttl {
            self.ttl = ttl;
        }
        if let Some(listen) = args.listen {
            self.listen = listen;
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::BadValue("log_level").into())
    }
}

fn string_value(key: &'static str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| ConfigError::BadValue(key).into())
}

pub async fn init_from_args() -> Result<Config> {
    let mut args = Args::parse();
    let mut config = Config::new();
    if let Some(path) = args.config.take() {
        let text = tokio::fs::read_to_string(&path).await?;
        config.merge_toml(&text)?;
    }
    config.apply_args(args);
    Ok(config)
}
