use std::sync::Arc;

use crate::protocol::{DnsQuery, DnsReply, Question, RData, RecordType, ResourceRecord, RCODE_NAME_ERROR};
use crate::synthesizer::RecordSynthesizer;
use crate::zone::ZoneConfig;

/// Turns one query into one reply. Keeps nothing between queries.
#[derive(Debug, Clone)]
pub struct QueryDispatcher {
    synthesizer: RecordSynthesizer,
}

impl QueryDispatcher {
    pub fn new(zone: Arc<ZoneConfig>) -> Self {
        QueryDispatcher {
            synthesizer: RecordSynthesizer::new(zone),
        }
    }

    /// Returns `None` when the request must go unanswered.
    pub fn dispatch(&self, query: &DnsQuery) -> Option<DnsReply> {
        let questions = query.questions();
        if questions.len() != 1 {
            warn!("dropping query {}: len(question) = {}", query.get_id(), questions.len());
            return None;
        }
        let question = &questions[0];
        let mut reply = DnsReply::from_query(query);
        match self.synthesize(question) {
            Some(data) => {
                let is_ns = matches!(data, RData::Ns(_));
                let record = ResourceRecord::new(&question.name, self.synthesizer.zone().ttl(), data);
                reply.set_authoritative(true);
                if is_ns {
                    reply.push_authority(record);
                } else {
                    reply.push_answer(record);
                }
            }
            None => reply.set_rcode(RCODE_NAME_ERROR),
        }
        Some(reply)
    }

    fn synthesize(&self, question: &Question) -> Option<RData> {
        let name = question.name.as_str();
        match question._type {
            RecordType::Ns => self.synthesizer.synthesize_ns(name),
            RecordType::Ptr => self.synthesizer.synthesize_ptr(name),
            RecordType::Aaaa => self.synthesizer.synthesize_aaaa(name),
            RecordType::Other(_) => None,
        }
    }
}
