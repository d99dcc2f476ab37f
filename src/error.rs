use std::error::Error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ConfigError {
    BadNetwork(String),
    UnalignedMask(u8),
    BadName(String),
    UnknownKey(String),
    BadValue(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::BadNetwork(network) => {
                write!(f, "bad network {:?}: expected an IPv6 subnet in CIDR notation", network)
            }
            ConfigError::UnalignedMask(len) => {
                write!(f, "bad network: mask /{} must be a multiple of 8", len)
            }
            ConfigError::BadName(name) => write!(f, "name {:?} cannot be encoded in a DNS message", name),
            ConfigError::UnknownKey(key) => write!(f, "unknown config key {:?}", key),
            ConfigError::BadValue(key) => write!(f, "bad value for config key {:?}", key),
        }
    }
}

impl Error for ConfigError {}
