use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use crate::cursor::Cursor;
use crate::error::Result;
use crate::protocol::header::{rcode_name, Header, RCODE_FORMAT_ERROR};
use crate::protocol::{Question, ResourceRecord};

/// The parts of an inbound message the server looks at: the header and the
/// question section. Answer, authority and additional sections are ignored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DnsQuery {
    header: Header,
    questions: Vec<Question>,
}

impl DnsQuery {
    pub fn from(buf: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::from(buf);
        let header = Header::from(&mut cursor)?;
        let mut questions = Vec::with_capacity(header.question_count.min(4) as usize);
        for _ in 0..header.question_count {
            questions.push(Question::from(&mut cursor)?);
        }
        Ok(DnsQuery {
            header,
            questions,
        })
    }

    pub fn get_id(&self) -> u16 {
        self.header.id
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DnsReply {
    header: Header,
    question: Option<Question>,
    answers: Vec<ResourceRecord>,
    authorities: Vec<ResourceRecord>,
}

impl DnsReply {
    /// An empty NOERROR reply echoing the query's first question.
    pub fn from_query(query: &DnsQuery) -> Self {
        DnsReply {
            header: Header::reply_to(&query.header),
            question: query.questions.first().cloned(),
            answers: Vec::new(),
            authorities: Vec::new(),
        }
    }

    /// A header-only reply for a message whose body could not be read.
    pub fn format_error(query: &Header) -> Self {
        let mut header = Header::reply_to(query);
        header.set_rcode(RCODE_FORMAT_ERROR);
        DnsReply {
            header,
            question: None,
            answers: Vec::new(),
            authorities: Vec::new(),
        }
    }

    pub fn get_id(&self) -> u16 {
        self.header.id
    }

    pub fn rcode(&self) -> u8 {
        self.header.rcode()
    }

    pub fn set_rcode(&mut self, rcode: u8) {
        self.header.set_rcode(rcode);
    }

    pub fn is_authoritative(&self) -> bool {
        self.header.is_authoritative()
    }

    pub fn set_authoritative(&mut self, authoritative: bool) {
        self.header.set_authoritative(authoritative);
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    pub fn authorities(&self) -> &[ResourceRecord] {
        &self.authorities
    }

    pub fn push_answer(&mut self, record: ResourceRecord) {
        self.answers.push(record);
    }

    pub fn push_authority(&mut self, record: ResourceRecord) {
        self.authorities.push(record);
    }

    pub fn to_u8_vec(&self) -> Result<Vec<u8>> {
        let mut header = self.header.clone();
        header.question_count = self.question.iter().count() as u16;
        header.answer_count = u16::try_from(self.answers.len())?;
        header.authority_count = u16::try_from(self.authorities.len())?;
        header.additional_count = 0;
        let mut vec = header.to_u8_vec();
        if let Some(question) = &self.question {
            vec.extend(question.to_u8_vec()?);
        }
        for record in self.answers.iter().chain(self.authorities.iter()) {
            vec.extend(record.to_u8_vec()?);
        }
        Ok(vec)
    }
}

impl Display for DnsReply {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let header = &self.header;
        write!(f, ";; opcode: {}, status: {}, id: {}\n;; flags: qr",
               header.opcode(), rcode_name(header.rcode()), header.id)?;
        if header.is_authoritative() {
            write!(f, " aa")?;
        }
        if header.is_recursion_desired() {
            write!(f, " rd")?;
        }
        if let Some(question) = &self.question {
            write!(f, "\n;; QUESTION SECTION:\n;{}", question)?;
        }
        if !self.answers.is_empty() {
            write!(f, "\n;; ANSWER SECTION:")?;
            for record in &self.answers {
                write!(f, "\n{}", record)?;
            }
        }
        if !self.authorities.is_empty() {
            write!(f, "\n;; AUTHORITY SECTION:")?;
            for record in &self.authorities {
                write!(f, "\n{}", record)?;
            }
        }
        Ok(())
    }
}
