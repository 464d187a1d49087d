use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use unibase_core::consultation::{
    mock_report, parse_report, ConsultationInput, ConsultationReport, ADVISOR_SYSTEM_PROMPT,
};

use crate::llm::{generate_with_fallback, CompletionRequest, LlmClient, ReportSource};

pub const CONSULTATION_MAX_TOKENS: u32 = 4096;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Consultation {
    pub report: ConsultationReport,
    pub source: ReportSource,
}

/// Turns a consultation form into a report, preferring the configured model.
#[derive(Clone, Default)]
pub struct ConsultationService {
    client: Option<Arc<dyn LlmClient>>,
}

impl ConsultationService {
    pub fn new(client: Option<Arc<dyn LlmClient>>) -> Self {
        Self { client }
    }

    pub fn provider(&self) -> &'static str {
        self.client.as_deref().map(|client| client.provider()).unwrap_or("mock")
    }

    pub async fn consult(&self, input: &ConsultationInput, correlation_id: &str) -> Consultation {
        let request = CompletionRequest::json(
            ADVISOR_SYSTEM_PROMPT,
            input.user_message(),
            CONSULTATION_MAX_TOKENS,
        );

        let (report, source) = generate_with_fallback(
            self.client.as_deref(),
            &request,
            parse_report,
            || mock_report(input),
            "agent.consultation.fallback",
            correlation_id,
        )
        .await;

        info!(
            event_name = "agent.consultation.completed",
            correlation_id = correlation_id,
            provider = self.provider(),
            source = ?source,
            supplements = report.supplements.len(),
            "consultation report generated"
        );

        Consultation { report, source }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm::testing::StubClient;

    fn input() -> ConsultationInput {
        ConsultationInput {
            current_concerns: "肩こりと眠りの浅さ".to_string(),
            lifestyle_rhythm: "デスクワーク".to_string(),
            additional_notes: String::new(),
        }
    }

    #[tokio::test]
    async fn without_client_uses_keyword_report() {
        let service = ConsultationService::new(None);
        let consultation = service.consult(&input(), "c-1").await;

        assert_eq!(consultation.source, ReportSource::Mock);
        assert_eq!(consultation.report, mock_report(&input()));
        assert_eq!(service.provider(), "mock");
    }

    #[tokio::test]
    async fn provider_reply_is_parsed_and_request_is_shaped() {
        let stub = Arc::new(StubClient::replying(
            "```json\n{\"summary\":\"remote\",\"supplements\":[],\"selfCare\":[]}\n```",
        ));
        let service = ConsultationService::new(Some(stub.clone()));

        let consultation = service.consult(&input(), "c-2").await;
        assert_eq!(consultation.source, ReportSource::Provider);
        assert_eq!(consultation.report.summary, "remote");

        let request = stub.last_request().expect("request recorded");
        assert_eq!(request.system_prompt, ADVISOR_SYSTEM_PROMPT);
        assert_eq!(request.max_tokens, CONSULTATION_MAX_TOKENS);
        assert!(request.user_message.contains("肩こりと眠りの浅さ"));
    }

    #[tokio::test]
    async fn failing_provider_falls_back_to_keyword_report() {
        let service = ConsultationService::new(Some(Arc::new(StubClient::failing("503"))));

        let consultation = service.consult(&input(), "c-3").await;
        assert_eq!(consultation.source, ReportSource::Fallback);
        assert_eq!(consultation.report, mock_report(&input()));
    }
}
