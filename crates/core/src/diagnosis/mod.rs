//! Diagnosis questionnaire engine
//!
//! Turns a completed questionnaire into ranked supplement recommendations,
//! threshold-based self-care items and a short summary. Everything here is
//! deterministic and side-effect free.

mod catalog;
mod engine;
mod scoring;
mod selfcare;
mod types;

pub use catalog::{rank, select_top, Supplement, SupplementProfile};
pub use engine::{summarize, DiagnosisEngine};
pub use scoring::{ScoreCalculator, CONCERN_BONUS};
pub use selfcare::{match_rules, recommend as recommend_self_care, SelfCareRule, SELF_CARE_RULES};
pub use types::*;

/// Number of supplements returned per diagnosis.
pub const MAX_SUPPLEMENTS: usize = 3;

/// Convenience wrapper around [`DiagnosisEngine::diagnose`].
pub fn diagnose(answers: &DiagnosisAnswers) -> DiagnosisResult {
    DiagnosisEngine::new().diagnose(answers)
}
