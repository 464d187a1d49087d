//! Domain core for the wellness questionnaire service.
//!
//! Scoring and recommendation logic is pure and synchronous so that the
//! server, the CLI and tests can all drive it without a runtime.

pub mod coach;
pub mod config;
pub mod consultation;
pub mod diagnosis;
pub mod errors;

pub use coach::{coach_user_message, mock_plan, parse_plan, CoachLog, DailyPlan, PlanItem};
pub use consultation::{
    mock_report, parse_report, ConsultationInput, ConsultationReport, ReportSelfCare,
    ReportSupplement,
};
pub use diagnosis::{diagnose, DiagnosisAnswers, DiagnosisEngine, DiagnosisResult};
pub use errors::{ApplicationError, DomainError, InterfaceError};
