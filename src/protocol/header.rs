use crate::cursor::Cursor;
use crate::error::Result;

const FLAG_QR: u16 = 0x8000;
const FLAG_AA: u16 = 0x0400;
const FLAG_RD: u16 = 0x0100;
const FLAG_CD: u16 = 0x0010;
const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x7800;
const RCODE_MASK: u16 = 0x000f;

pub const OPCODE_QUERY: u8 = 0;

pub const RCODE_NO_ERROR: u8 = 0;
pub const RCODE_FORMAT_ERROR: u8 = 1;
pub const RCODE_NAME_ERROR: u8 = 3;
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn to_u8_vec(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(12);
        result.extend(&self.id.to_be_bytes());
        result.extend(&self.flags.to_be_bytes());
        result.extend(&self.question_count.to_be_bytes());
        result.extend(&self.answer_count.to_be_bytes());
        result.extend(&self.authority_count.to_be_bytes());
        result.extend(&self.additional_count.to_be_bytes());
        result
    }

    pub fn from(cursor: &mut Cursor) -> Result<Self> {
        Ok(Header {
            id: cursor.take_u16()?,
            flags: cursor.take_u16()?,
            question_count: cursor.take_u16()?,
            answer_count: cursor.take_u16()?,
            authority_count: cursor.take_u16()?,
            additional_count: cursor.take_u16()?,
        })
    }

    /// Header of a reply to `query`: same id and opcode, QR set, and for
    /// standard queries the RD and CD bits echoed back.
    pub fn reply_to(query: &Header) -> Self {
        let mut flags = FLAG_QR | (query.flags & OPCODE_MASK);
        if query.opcode() == OPCODE_QUERY {
            flags |= query.flags & (FLAG_RD | FLAG_CD);
        }
        Header {
            id: query.id,
            flags,
            question_count: 0,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn set_authoritative(&mut self, authoritative: bool) {
        if authoritative {
            self.flags |= FLAG_AA;
        } else {
            self.flags &= !FLAG_AA;
        }
    }

    pub fn is_recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    pub fn set_rcode(&mut self, rcode: u8) {
        self.flags = (self.flags & !RCODE_MASK) | (rcode as u16 & RCODE_MASK);
    }
}

pub fn rcode_name(rcode: u8) -> &'static str {
    match rcode {
        RCODE_NO_ERROR => "NOERROR",
        RCODE_FORMAT_ERROR => "FORMERR",
        2 => "SERVFAIL",
        RCODE_NAME_ERROR => "NXDOMAIN",
        RCODE_NOT_IMPLEMENTED => "NOTIMP",
        5 => "REFUSED",
        _ => "RCODE",
    }
}

#[cfg(test)]
pub mod tests {
    use crate::protocol::header::{Header, RCODE_NAME_ERROR};
    use crate::cursor::Cursor;

    #[test]
    fn should_return_header_when_from_given_twelve_bytes() {
        let bytes = get_test_header().to_u8_vec();
        let mut cursor = Cursor::from(&bytes);

        let result = Header::from(&mut cursor);

        assert_eq!(get_test_header(), result.unwrap());
        assert_eq!(12, cursor.get_current_index());
    }

    #[test]
    fn should_return_error_when_from_given_short_message() {
        let bytes = get_test_header().to_u8_vec();
        let mut cursor = Cursor::from(&bytes[..11]);

        let result = Header::from(&mut cursor);

        assert!(result.is_err());
    }

    #[test]
    fn should_keep_id_and_rd_when_reply_to_given_standard_query() {
        let query = get_test_header();

        let result = Header::reply_to(&query);

        assert_eq!(0xbeef, result.id);
        assert!(result.is_response());
        assert!(result.is_recursion_desired());
        assert!(!result.is_authoritative());
        assert_eq!(0, result.opcode());
        assert_eq!(0, result.rcode());
    }

    #[test]
    fn should_keep_opcode_and_drop_rd_when_reply_to_given_notify() {
        let mut query = get_test_header();
        query.flags = 0x2100;

        let result = Header::reply_to(&query);

        assert_eq!(4, result.opcode());
        assert!(!result.is_recursion_desired());
    }

    #[test]
    fn should_only_touch_low_bits_when_set_rcode_given_name_error() {
        let mut header = Header::reply_to(&get_test_header());
        header.set_authoritative(true);

        header.set_rcode(RCODE_NAME_ERROR);

        assert_eq!(0x8503, header.flags);
    }

    pub fn get_test_header() -> Header {
        Header {
            id: 0xbeef,
            flags: 0x0100,
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
        }
    }
}
