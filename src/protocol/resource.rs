use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::net::Ipv6Addr;

use crate::error::Result;
use crate::protocol::{wrap_name, RecordType, CLASS_IN};

/// Record data this server knows how to produce.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RData {
    Ns(String),
    Ptr(String),
    Aaaa(Ipv6Addr),
}

impl RData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RData::Ns(_) => RecordType::Ns,
            RData::Ptr(_) => RecordType::Ptr,
            RData::Aaaa(_) => RecordType::Aaaa,
        }
    }

    fn to_u8_vec(&self) -> Result<Vec<u8>> {
        match self {
            RData::Ns(name) | RData::Ptr(name) => wrap_name(name),
            RData::Aaaa(address) => Ok(address.octets().to_vec()),
        }
    }
}

impl Display for RData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RData::Ns(name) | RData::Ptr(name) => write!(f, "{}", name),
            RData::Aaaa(address) => write!(f, "{}", address),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResourceRecord {
    pub name: String,
    pub class: u16,
    pub ttl: u32,
    pub data: RData,
}

impl ResourceRecord {
    pub fn new(name: &str, ttl: u32, data: RData) -> Self {
        ResourceRecord {
            name: name.to_string(),
            class: CLASS_IN,
            ttl,
            data,
        }
    }

    pub fn to_u8_vec(&self) -> Result<Vec<u8>> {
        let data = self.data.to_u8_vec()?;
        let data_len = u16::try_from(data.len())?;
        let mut result = wrap_name(&self.name)?;
        result.extend(&u16::from(self.data.record_type()).to_be_bytes());
        result.extend(&self.class.to_be_bytes());
        result.extend(&self.ttl.to_be_bytes());
        result.extend(&data_len.to_be_bytes());
        result.extend(data);
        Ok(result)
    }
}

impl Display for ResourceRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\tIN\t{}\t{}", self.name, self.ttl, self.data.record_type(), self.data)
    }
}

#[cfg(test)]
pub mod tests {
    use crate::protocol::resource::{RData, ResourceRecord};

    #[test]
    fn should_write_sixteen_byte_rdata_when_to_u8_vec_given_aaaa_record() {
        let record = ResourceRecord::new(".", 3600, RData::Aaaa("fe80::1".parse().unwrap()));

        let result = record.to_u8_vec().unwrap();

        let mut expected = vec![0, 0, 28, 0, 1, 0, 0, 0x0e, 0x10, 0, 16, 0xfe, 0x80];
        expected.extend(&[0u8; 13]);
        expected.push(1);
        assert_eq!(expected, result);
    }

    #[test]
    fn should_write_name_rdata_when_to_u8_vec_given_ns_record() {
        let record = ResourceRecord::new("ip6.arpa.", 60, RData::Ns("ns.example.".to_string()));

        let result = record.to_u8_vec().unwrap();

        let expected: Vec<u8> = vec![
            3, b'i', b'p', b'6', 4, b'a', b'r', b'p', b'a', 0,
            0, 2, 0, 1, 0, 0, 0, 60, 0, 12,
            2, b'n', b's', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0,
        ];
        assert_eq!(expected, result);
    }

    #[test]
    fn should_return_error_when_to_u8_vec_given_unencodable_ptr_target() {
        let name = format!("ip-{}.example.", "f".repeat(64));
        let record = ResourceRecord::new("ip6.arpa.", 60, RData::Ptr(name));

        let result = record.to_u8_vec();

        assert!(result.is_err());
    }

    #[test]
    fn should_format_zone_file_line_when_display_given_ptr_record() {
        let record = ResourceRecord::new("1.ip6.arpa.", 60, RData::Ptr("ip-1.example.".to_string()));

        let result = record.to_string();

        assert_eq!("1.ip6.arpa.\t60\tIN\tPTR\tip-1.example.", result);
    }
}
