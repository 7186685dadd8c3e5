use crate::ports::{DnsForwarder, ForwardedReply};
use crate::services::{AnswerSynthesizer, ZoneClassifier};
use localdns_domain::{Classification, DnsAnswer, DnsRequest, QuestionPolicy};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// What the router decided for one question.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    Local {
        classification: Classification,
        answer: DnsAnswer,
    },
    Forwarded(ForwardedReply),
}

impl QueryOutcome {
    pub fn classification(&self) -> Classification {
        match self {
            QueryOutcome::Local { classification, .. } => *classification,
            QueryOutcome::Forwarded(_) => Classification::Forward,
        }
    }
}

pub struct HandleDnsQueryUseCase {
    classifier: Arc<ZoneClassifier>,
    synthesizer: Arc<AnswerSynthesizer>,
    forwarder: Arc<dyn DnsForwarder>,
    question_policy: QuestionPolicy,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        classifier: Arc<ZoneClassifier>,
        synthesizer: Arc<AnswerSynthesizer>,
        forwarder: Arc<dyn DnsForwarder>,
    ) -> Self {
        Self {
            classifier,
            synthesizer,
            forwarder,
            question_policy: QuestionPolicy::default(),
        }
    }

    pub fn with_question_policy(mut self, policy: QuestionPolicy) -> Self {
        self.question_policy = policy;
        self
    }

    /// Routes every question the policy admits, in request order. The result
    /// holds exactly one outcome per routed question.
    pub async fn execute_all(&self, requests: &[DnsRequest]) -> Vec<QueryOutcome> {
        let routed = match self.question_policy {
            QuestionPolicy::All => requests,
            QuestionPolicy::First => &requests[..requests.len().min(1)],
        };

        let mut outcomes = Vec::with_capacity(routed.len());
        for request in routed {
            outcomes.push(self.execute(request).await);
        }
        outcomes
    }

    pub async fn execute(&self, request: &DnsRequest) -> QueryOutcome {
        let start = Instant::now();
        let query = &request.query;
        let classification = self.classifier.classify(query);

        if classification.is_local() {
            let answer = self.synthesizer.synthesize(query);
            info!(
                client = %request.client_ip,
                domain = %query.domain,
                record_type = %query.record_type,
                classification = %classification,
                address = %self.synthesizer.zone().listen_address,
                answers = answer.records.len(),
                rcode = %answer.rcode,
                elapsed_us = start.elapsed().as_micros() as u64,
                "Local answer"
            );
            return QueryOutcome::Local {
                classification,
                answer,
            };
        }

        let reply = self.forwarder.forward(query).await;
        let resolver = reply
            .resolver
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "none".to_string());
        info!(
            client = %request.client_ip,
            domain = %query.domain,
            record_type = %query.record_type,
            resolver = %resolver,
            answers = reply.answer_count,
            rcode = %reply.rcode,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Forwarded query"
        );
        QueryOutcome::Forwarded(reply)
    }
}
