use std::fmt::{Display, Formatter};

use ipnet::Ipv6Net;

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::protocol::is_encodable_name;

/// Number of nibbles in an IPv6 address.
pub const NIBBLES: usize = 32;

/// The immutable description of the served subnet and of the names
/// synthesized for it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ZoneConfig {
    prefix: String,
    host_prefix: String,
    domain_suffix: String,
    ns_name: String,
    ttl: u32,
}

impl ZoneConfig {
    pub fn new(network: Ipv6Net,
               host_prefix: &str,
               domain_suffix: &str,
               ns_name: &str,
               ttl: u32) -> std::result::Result<Self, ConfigError> {
        let ones = network.prefix_len();
        if ones % 8 != 0 {
            return Err(ConfigError::UnalignedMask(ones));
        }
        let octets = network.network().octets();
        let prefix = hex::encode(&octets[..ones as usize / 8]);
        let longest_host = format!("{}{}{}", host_prefix, "f".repeat(NIBBLES - prefix.len()), domain_suffix);
        for name in [ns_name, longest_host.as_str()].iter() {
            if !is_encodable_name(name) {
                return Err(ConfigError::BadName(name.to_string()));
            }
        }
        Ok(ZoneConfig {
            prefix,
            host_prefix: host_prefix.to_string(),
            domain_suffix: domain_suffix.to_string(),
            ns_name: ns_name.to_string(),
            ttl,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let network = config
            .network
            .parse::<Ipv6Net>()
            .map_err(|_| ConfigError::BadNetwork(config.network.clone()))?;
        Ok(ZoneConfig::new(network, &config.host_prefix, &config.domain, &config.ns, config.ttl)?)
    }

    /// Lowercase hex nibbles shared by every address of the zone.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of nibbles left for the host identifier.
    pub fn host_id_len(&self) -> usize {
        NIBBLES - self.prefix.len()
    }

    pub fn host_prefix(&self) -> &str {
        &self.host_prefix
    }

    pub fn domain_suffix(&self) -> &str {
        &self.domain_suffix
    }

    pub fn ns_name(&self) -> &str {
        &self.ns_name
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }
}

impl Display for ZoneConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(prefix={:?}, names={}<id>{}, ns={}, ttl={})",
               self.prefix, self.host_prefix, self.domain_suffix, self.ns_name, self.ttl)
    }
}
