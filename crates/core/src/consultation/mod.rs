//! Free-text AI consultation
//!
//! Holds the request/report types shared by the remote advisor path and the
//! deterministic keyword-driven report used when no model is available.

mod mock;
mod prompt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

pub use mock::{mock_report, Signals};
pub use prompt::{ADVISOR_SYSTEM_PROMPT, COACH_SYSTEM_PROMPT};

/// What the member wrote into the consultation form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsultationInput {
    pub current_concerns: String,
    pub lifestyle_rhythm: String,
    pub additional_notes: String,
}

impl ConsultationInput {
    /// User turn sent alongside [`ADVISOR_SYSTEM_PROMPT`].
    pub fn user_message(&self) -> String {
        format!(
            "【現在の悩み】\n{}\n\n【生活リズム】\n{}\n\n【その他気になること】\n{}\n\n上記の内容を分析し、JSON形式でアドバイスを生成してください。",
            self.current_concerns.trim(),
            self.lifestyle_rhythm.trim(),
            self.additional_notes.trim(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportSupplement {
    pub name: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSelfCare {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Personalised consultation report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationReport {
    pub summary: String,
    #[serde(default)]
    pub supplements: Vec<ReportSupplement>,
    #[serde(default)]
    pub self_care: Vec<ReportSelfCare>,
}

/// Parses a model reply into a [`ConsultationReport`].
pub fn parse_report(raw: &str) -> Result<ConsultationReport, DomainError> {
    parse_json_reply(raw)
}

/// Decodes a JSON reply, tolerating a surrounding Markdown code fence.
pub fn parse_json_reply<T: DeserializeOwned>(raw: &str) -> Result<T, DomainError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(DomainError::MalformedReply("empty reply".to_string()));
    }
    serde_json::from_str(body).map_err(|error| DomainError::MalformedReply(error.to_string()))
}

/// Removes a leading ```` ```json ```` or ```` ``` ```` line and the closing fence.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
