//! JSON API for diagnosis, consultation and coaching

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use unibase_agent::{CoachService, CoachingPlan, Consultation, ConsultationService};
use unibase_core::coach::CoachLog;
use unibase_core::consultation::ConsultationInput;
use unibase_core::diagnosis::{DiagnosisAnswers, DiagnosisEngine, DiagnosisResult};
use unibase_core::errors::{ApplicationError, InterfaceError};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    pub engine: DiagnosisEngine,
    pub consultation: ConsultationService,
    pub coach: CoachService,
}

#[derive(Debug, Serialize)]
pub struct DiagnosisResponse {
    pub result: DiagnosisResult,
    /// Always `false`: results are handed back, storing them is the caller's job.
    pub saved: bool,
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoachPlanRequest {
    #[serde(default)]
    pub logs: Vec<CoachLog>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub correlation_id: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/diagnosis/run", post(run_diagnosis))
        .route("/api/ai/consult", post(consult))
        .route("/api/ai/coach/plan", post(coach_plan))
        .with_state(state)
}

fn correlation_id() -> String {
    Uuid::new_v4().to_string()
}

fn interface_error(error: InterfaceError) -> (StatusCode, Json<ApiError>) {
    let (status, message) = match &error {
        InterfaceError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message.clone()),
        InterfaceError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.user_message().to_string())
        }
    };

    (status, Json(ApiError { error: message, correlation_id: error.correlation_id().to_string() }))
}

fn rejection_error(rejection: JsonRejection, correlation_id: &str) -> (StatusCode, Json<ApiError>) {
    warn!(
        event_name = "api.request.rejected",
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "request body could not be decoded"
    );

    interface_error(InterfaceError::BadRequest {
        message: rejection.body_text(),
        correlation_id: correlation_id.to_string(),
    })
}

pub async fn run_diagnosis(
    State(state): State<ApiState>,
    payload: Result<Json<DiagnosisAnswers>, JsonRejection>,
) -> ApiResult<DiagnosisResponse> {
    let correlation_id = correlation_id();
    let Json(answers) = payload.map_err(|rejection| rejection_error(rejection, &correlation_id))?;

    if let Err(error) = answers.validate_required() {
        warn!(
            event_name = "diagnosis.run.invalid",
            correlation_id = %correlation_id,
            error = %error,
            "diagnosis request failed validation"
        );
        return Err(interface_error(
            ApplicationError::from(error).into_interface(correlation_id.as_str()),
        ));
    }

    let result = state.engine.diagnose(&answers);

    info!(
        event_name = "diagnosis.run.completed",
        correlation_id = %correlation_id,
        top_supplement = result.supplements.first().map(|s| s.name.as_str()).unwrap_or(""),
        self_care = result.self_care.len(),
        "diagnosis completed"
    );

    Ok(Json(DiagnosisResponse { result, saved: false, id: None }))
}

pub async fn consult(
    State(state): State<ApiState>,
    payload: Result<Json<ConsultationInput>, JsonRejection>,
) -> ApiResult<Consultation> {
    let correlation_id = correlation_id();
    let Json(input) = payload.map_err(|rejection| rejection_error(rejection, &correlation_id))?;

    Ok(Json(state.consultation.consult(&input, &correlation_id).await))
}

pub async fn coach_plan(
    State(state): State<ApiState>,
    payload: Result<Json<CoachPlanRequest>, JsonRejection>,
) -> ApiResult<CoachingPlan> {
    let correlation_id = correlation_id();
    let Json(request) = payload.map_err(|rejection| rejection_error(rejection, &correlation_id))?;

    Ok(Json(state.coach.daily_plan(&request.logs, &correlation_id).await))
}
