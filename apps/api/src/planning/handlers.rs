//! Axum route handlers for the Planning API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::planning::pipeline::{plan_email, RenderedJob};
use crate::planning::templates::render_plan_text;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Query string of the webhook hand-off, e.g. `/plan?body=...`.
#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub email_text: String,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub request_id: Uuid,
    pub jobs: Vec<RenderedJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /plan?body=<email text>
///
/// Webhook entry point for ticketing tools that hand the email over in the URL.
/// Responds with the plain-text plan document.
pub async fn handle_plan_webhook(
    State(state): State<AppState>,
    query: Result<Query<PlanQuery>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let email_text = query
        .body
        .ok_or_else(|| AppError::Validation("query parameter 'body' is required".to_string()))?;

    let request_id = Uuid::new_v4();
    let jobs = plan_email(state.extractor.as_ref(), &email_text)
        .instrument(info_span!("plan", %request_id, source = "webhook"))
        .await?;

    info!("Plan {request_id} rendered {} job(s)", jobs.len());
    Ok(render_plan_text(&jobs))
}

/// POST /api/v1/plan
///
/// Manual entry: the operator pastes the email text. Returns the same text blocks
/// per job, wrapped for display.
pub async fn handle_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let request_id = Uuid::new_v4();
    let jobs = plan_email(state.extractor.as_ref(), &request.email_text)
        .instrument(info_span!("plan", %request_id, source = "manual"))
        .await?;

    info!("Plan {request_id} rendered {} job(s)", jobs.len());
    Ok(Json(PlanResponse { request_id, jobs }))
}
