//! Axum route handlers for the journey overview.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::journey::phases::PHASES;
use crate::journey::status::derive_status;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PhaseStatusView {
    pub name: &'static str,
    pub description: &'static str,
    pub completed: bool,
    pub current: bool,
    pub locked: bool,
}

#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    pub phases: Vec<PhaseStatusView>,
    pub current: Option<usize>,
    pub completed: usize,
    pub total: usize,
}

/// GET /api/v1/journey
///
/// Derives the four-phase journey view from stored completion flags.
/// A phase is locked whenever an earlier phase is still open, regardless
/// of any progress recorded against it.
pub async fn handle_journey(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<JourneyResponse>, AppError> {
    let flags = phase_flags(&state.db, params.user_id).await?;
    let summary = derive_status(&flags);

    let phases = PHASES
        .iter()
        .zip(summary.steps.iter())
        .map(|(def, step)| PhaseStatusView {
            name: def.name,
            description: def.description,
            completed: step.completed,
            current: step.current,
            locked: step.locked,
        })
        .collect();

    Ok(Json(JourneyResponse {
        phases,
        current: summary.current,
        completed: summary.completed,
        total: summary.total,
    }))
}

/// Collects the raw per-phase completion flags, in program order.
async fn phase_flags(pool: &PgPool, user_id: Uuid) -> Result<[bool; 4], AppError> {
    let onboarding_done: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM onboarding_progress WHERE user_id = $1 AND completed)",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let ikigai_done: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM ikigai_progress WHERE user_id = $1 AND completed)",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let research_done: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM industry_research WHERE user_id = $1 AND completed)",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let has_learning_plan: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM learning_plans WHERE user_id = $1)")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    let has_building_plan: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM building_in_public_plans WHERE user_id = $1)",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let has_target_firm: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM target_firms WHERE user_id = $1)")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    Ok([
        onboarding_done && ikigai_done,
        research_done && has_learning_plan,
        has_building_plan,
        has_target_firm,
    ])
}
