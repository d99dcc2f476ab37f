use std::net::Ipv6Addr;
use std::sync::Arc;

use crate::matcher::{NameMatchers, ReverseMatcher};
use crate::protocol::RData;
use crate::zone::ZoneConfig;

/// Derives NS, PTR and AAAA data from query names. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct RecordSynthesizer {
    zone: Arc<ZoneConfig>,
    matchers: NameMatchers,
}

impl RecordSynthesizer {
    pub fn new(zone: Arc<ZoneConfig>) -> Self {
        let matchers = NameMatchers::from(&zone);
        RecordSynthesizer {
            zone,
            matchers,
        }
    }

    pub fn zone(&self) -> &ZoneConfig {
        &self.zone
    }

    /// Answers for any reverse name at or below the subnet's reverse zone.
    pub fn synthesize_ns(&self, name: &str) -> Option<RData> {
        self.host_id(&self.matchers.zone, name)?;
        Some(RData::Ns(self.zone.ns_name().to_string()))
    }

    pub fn synthesize_ptr(&self, name: &str) -> Option<RData> {
        let host_id = self.host_id(&self.matchers.ptr, name)?;
        // Host id zero trims down to an empty string.
        let trimmed = host_id.trim_start_matches('0');
        Some(RData::Ptr(format!("{}{}{}",
                                self.zone.host_prefix(), trimmed, self.zone.domain_suffix())))
    }

    pub fn synthesize_aaaa(&self, name: &str) -> Option<RData> {
        let digits = self.matchers.aaaa.captures(name)?;
        let nibbles = format!("{}{:0>width$}", self.zone.prefix(), digits,
                              width = self.zone.host_id_len());
        let mut octets = [0u8; 16];
        if let Err(e) = hex::decode_to_slice(&nibbles, &mut octets) {
            error!("matched name {} decoded to bad address {:?}: {}", name, nibbles, e);
            return None;
        }
        Some(RData::Aaaa(Ipv6Addr::from(octets)))
    }

    /// Reassembles the nibbles captured by `matcher` in address order and
    /// returns what follows the zone prefix.
    fn host_id(&self, matcher: &ReverseMatcher, name: &str) -> Option<String> {
        let labels = matcher.captures(name)?;
        let nibbles = reverse_nibbles(&labels);
        let host_id = nibbles.strip_prefix(self.zone.prefix())?;
        Some(host_id.to_string())
    }
}

fn reverse_nibbles(labels: &[&str]) -> String {
    labels.iter().rev().map(|l| l.to_ascii_lowercase()).collect()
}
