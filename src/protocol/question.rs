use std::fmt::{Display, Formatter};

use crate::cursor::Cursor;
use crate::error::Result;
use crate::protocol::{unzip_name, wrap_name, CLASS_IN};

const TYPE_NS: u16 = 2;
const TYPE_PTR: u16 = 12;
const TYPE_AAAA: u16 = 28;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RecordType {
    Ns,
    Ptr,
    Aaaa,
    Other(u16),
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        match value {
            TYPE_NS => RecordType::Ns,
            TYPE_PTR => RecordType::Ptr,
            TYPE_AAAA => RecordType::Aaaa,
            other => RecordType::Other(other),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(t: RecordType) -> Self {
        match t {
            RecordType::Ns => TYPE_NS,
            RecordType::Ptr => TYPE_PTR,
            RecordType::Aaaa => TYPE_AAAA,
            RecordType::Other(other) => other,
        }
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordType::Ns => write!(f, "NS"),
            RecordType::Ptr => write!(f, "PTR"),
            RecordType::Aaaa => write!(f, "AAAA"),
            RecordType::Other(other) => write!(f, "TYPE{}", other),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Question {
    pub name: String,
    pub _type: RecordType,
    pub class: u16,
}

impl Question {
    pub fn new(name: &str, _type: RecordType) -> Self {
        Question {
            name: name.to_string(),
            _type,
            class: CLASS_IN,
        }
    }

    pub fn from(cursor: &mut Cursor) -> Result<Self> {
        let name = unzip_name(cursor)?;
        let _type = RecordType::from(cursor.take_u16()?);
        let class = cursor.take_u16()?;
        Ok(Question {
            name,
            _type,
            class,
        })
    }

    pub fn to_u8_vec(&self) -> Result<Vec<u8>> {
        let mut result = wrap_name(&self.name)?;
        result.extend(&u16::from(self._type).to_be_bytes());
        result.extend(&self.class.to_be_bytes());
        Ok(result)
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.class == CLASS_IN {
            write!(f, "{}\tIN\t{}", self.name, self._type)
        } else {
            write!(f, "{}\tCLASS{}\t{}", self.name, self.class, self._type)
        }
    }
}
