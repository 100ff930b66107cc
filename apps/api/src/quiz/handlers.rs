use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::quiz::{DetailedProfile, GeneralQuestion, Profession, ProfessionQuestion};
use crate::quiz::machine::{FlowConfig, Intent, QuizState};
use crate::quiz::question_bank::{general_questions, profession_questions, profile};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    /// Optional steps enabled for this deployment.
    pub flow: FlowConfig,
    pub state: QuizState,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionSummary {
    pub profession: Profession,
    pub question_count: usize,
    pub profile: &'static DetailedProfile,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        flow: state.session.flow(),
        state: state.session.snapshot().await,
    })
}

/// POST /api/v1/session/events
pub async fn handle_event(
    State(state): State<AppState>,
    Json(intent): Json<Intent>,
) -> Result<Json<SessionResponse>, AppError> {
    let dispatched = state.session.dispatch(intent).await?;
    if !dispatched.tasks.is_empty() {
        debug!(effects = dispatched.tasks.len(), "Started gateway effects");
    }
    Ok(Json(SessionResponse {
        flow: state.session.flow(),
        state: dispatched.state,
    }))
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<SessionResponse>, AppError> {
    let dispatched = state.session.dispatch(Intent::Reset).await?;
    Ok(Json(SessionResponse {
        flow: state.session.flow(),
        state: dispatched.state,
    }))
}

/// GET /api/v1/questions/general
pub async fn handle_general_questions() -> Json<&'static [GeneralQuestion]> {
    Json(general_questions())
}

/// GET /api/v1/professions
pub async fn handle_professions() -> Json<Vec<ProfessionSummary>> {
    let catalog = Profession::ALL
        .into_iter()
        .map(|profession| ProfessionSummary {
            profession,
            question_count: profession_questions(profession).len(),
            profile: profile(profession),
        })
        .collect();
    Json(catalog)
}

/// GET /api/v1/professions/:profession/questions
pub async fn handle_profession_questions(
    Path(name): Path<String>,
) -> Result<Json<&'static [ProfessionQuestion]>, AppError> {
    let profession = Profession::parse(&name)
        .ok_or_else(|| AppError::NotFound(format!("Profession {name} not found")))?;
    Ok(Json(profession_questions(profession)))
}
