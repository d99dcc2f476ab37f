mod header;
mod question;
mod resource;
mod message;

use crate::cursor::Cursor;
use crate::error::Result;

pub use header::{Header, OPCODE_QUERY, RCODE_FORMAT_ERROR, RCODE_NAME_ERROR, RCODE_NOT_IMPLEMENTED, RCODE_NO_ERROR};
pub use question::{Question, RecordType};
pub use resource::{RData, ResourceRecord};
pub use message::{DnsQuery, DnsReply};

pub const CLASS_IN: u16 = 1;

const C_FACTOR: u8 = 0xc0;
const DC_FACTOR: u16 = 0x3fff;
const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;
const MAX_POINTER_HOPS: usize = 32;

fn parse_name(cursor: &mut Cursor, name: &mut String, hops: usize) -> Result<()> {
    let seg_len = cursor.peek()?;
    if seg_len & C_FACTOR == C_FACTOR {
        if hops >= MAX_POINTER_HOPS {
            return Err("too many compression pointers in name".into());
        }
        let c_index = cursor.take_u16()? & DC_FACTOR;
        cursor.tmp_at(c_index as usize, |c| parse_name(c, name, hops + 1))
    } else if seg_len & C_FACTOR != 0 {
        Err(format!("unsupported label type {:#04x}", seg_len).into())
    } else {
        cursor.take()?;
        if seg_len == 0 {
            if name.is_empty() {
                name.push('.');
            }
            return Ok(());
        }
        let segment = cursor.take_slice(seg_len as usize)?;
        if !segment.iter().all(|b| b.is_ascii_graphic() && *b != b'.') {
            return Err(format!("unsupported bytes in label {:?}", String::from_utf8_lossy(segment)).into());
        }
        // Every byte is ASCII at this point.
        segment.iter().for_each(|b| name.push(*b as char));
        name.push('.');
        if name.len() >= MAX_NAME_LEN {
            return Err("name exceeds 255 bytes".into());
        }
        parse_name(cursor, name, hops)
    }
}

/// Reads a possibly compressed name as dotted text with a trailing dot.
fn unzip_name(cursor: &mut Cursor) -> Result<String> {
    let mut name = String::new();
    parse_name(cursor, &mut name, 0)?;
    Ok(name)
}

pub fn is_encodable_name(name: &str) -> bool {
    wrap_name(name).is_ok()
}

/// Encodes dotted text as uncompressed wire labels. A missing trailing dot
/// is tolerated; the name is always written fully qualified.
fn wrap_name(name: &str) -> Result<Vec<u8>> {
    let mut vec = Vec::with_capacity(name.len() + 2);
    let name = name.strip_suffix('.').unwrap_or(name);
    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(format!("bad label {:?} in name {:?}", label, name).into());
            }
            vec.push(label.len() as u8);
            vec.extend(label.bytes());
        }
    }
    vec.push(0);
    if vec.len() > MAX_NAME_LEN {
        return Err(format!("name {:?} exceeds 255 bytes", name).into());
    }
    Ok(vec)
}
