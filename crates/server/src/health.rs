use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use unibase_core::config::{LlmConfig, LlmProvider};

#[derive(Clone)]
pub struct HealthState {
    provider: LlmProvider,
    model: String,
}

impl HealthState {
    pub fn from_config(llm: &LlmConfig) -> Self {
        Self { provider: llm.provider, model: llm.effective_model().to_string() }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub llm: HealthCheck,
    pub checked_at: String,
}

pub fn router(state: HealthState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}

/// The model provider is optional, so health never reports degraded for it.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let mode = if state.provider.is_remote() { "remote" } else { "mock" };

    let payload = HealthResponse {
        status: "ready",
        service: HealthCheck {
            status: "ready",
            detail: "unibase-server runtime initialized".to_string(),
        },
        llm: HealthCheck {
            status: "ready",
            detail: format!("provider={} model={} mode={mode}", state.provider_name(), state.model),
        },
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, Json};
    use unibase_core::config::{AppConfig, LlmProvider};

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_is_ready_with_mock_provider() {
        let state = HealthState::from_config(&AppConfig::default().llm);

        let (status, Json(payload)) = health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.service.status, "ready");
        assert!(payload.llm.detail.contains("mode=mock"));
    }

    #[tokio::test]
    async fn health_reports_remote_provider_and_model() {
        let mut llm = AppConfig::default().llm;
        llm.provider = LlmProvider::OpenAi;

        let (status, Json(payload)) = health(State(HealthState::from_config(&llm))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.llm.detail, "provider=openai model=gpt-4o-mini mode=remote");
    }
}
