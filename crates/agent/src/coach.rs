use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use unibase_core::coach::{coach_user_message, mock_plan, parse_plan, CoachLog, DailyPlan};
use unibase_core::consultation::COACH_SYSTEM_PROMPT;

use crate::llm::{generate_with_fallback, CompletionRequest, LlmClient, ReportSource};

pub const COACH_MAX_TOKENS: u32 = 2048;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoachingPlan {
    pub plan: DailyPlan,
    pub source: ReportSource,
}

#[derive(Clone, Default)]
pub struct CoachService {
    client: Option<Arc<dyn LlmClient>>,
}

impl CoachService {
    pub fn new(client: Option<Arc<dyn LlmClient>>) -> Self {
        Self { client }
    }

    /// Builds today's plan from `logs`, most recent first.
    pub async fn daily_plan(&self, logs: &[CoachLog], correlation_id: &str) -> CoachingPlan {
        let request =
            CompletionRequest::json(COACH_SYSTEM_PROMPT, coach_user_message(logs), COACH_MAX_TOKENS);

        let (plan, source) = generate_with_fallback(
            self.client.as_deref(),
            &request,
            parse_plan,
            mock_plan,
            "agent.coach.fallback",
            correlation_id,
        )
        .await;

        info!(
            event_name = "agent.coach.completed",
            correlation_id = correlation_id,
            logs = logs.len(),
            source = ?source,
            "daily plan generated"
        );

        CoachingPlan { plan, source }
    }
}
