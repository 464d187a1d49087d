//! Model-backed advice generation
//!
//! Wraps the remote chat providers behind [`llm::LlmClient`] and exposes the
//! consultation and coaching services used by the HTTP layer.
//!
//! # Fallback principle
//!
//! A model reply is never required. When no provider is configured, or the
//! provider call or reply parsing fails, the services answer with the
//! deterministic generators from `unibase-core` and record that in
//! [`llm::ReportSource`].

pub mod coach;
pub mod consultation;
pub mod llm;

pub use coach::{CoachService, CoachingPlan};
pub use consultation::{Consultation, ConsultationService};
pub use llm::{client_from_config, CompletionRequest, LlmClient, ReportSource};
