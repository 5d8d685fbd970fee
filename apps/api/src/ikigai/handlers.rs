//! Axum route handlers for the ikigai wizard and insight generation.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ikigai::insights::{generate_career_insights, CareerInsights};
use crate::ikigai::models::IkigaiData;
use crate::llm_client::AiContent;
use crate::models::ikigai::IkigaiProgressRow;
use crate::models::versioned::{read_versioned, write_versioned};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct IkigaiView {
    pub data: IkigaiData,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct IkigaiUpsertRequest {
    pub user_id: Uuid,
    pub data: IkigaiData,
}

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub user_id: Uuid,
}

/// GET /api/v1/ikigai
///
/// Absent or malformed stored answers read back as the all-empty default.
pub async fn handle_get_ikigai(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<IkigaiView>, AppError> {
    let row =
        sqlx::query_as::<_, IkigaiProgressRow>("SELECT * FROM ikigai_progress WHERE user_id = $1")
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    let data: IkigaiData = read_versioned(row.as_ref().map(|r| &r.data));
    let completed = data.is_complete();
    Ok(Json(IkigaiView { data, completed }))
}

/// PUT /api/v1/ikigai
///
/// Upserts the answers; the completed flag is derived, never client-set.
pub async fn handle_put_ikigai(
    State(state): State<AppState>,
    Json(req): Json<IkigaiUpsertRequest>,
) -> Result<Json<IkigaiView>, AppError> {
    let completed = req.data.is_complete();

    sqlx::query(
        r#"
        INSERT INTO ikigai_progress (user_id, data, completed, updated_at)
        VALUES ($1, $2, $3, now())
        ON CONFLICT (user_id) DO UPDATE
            SET data = EXCLUDED.data,
                completed = EXCLUDED.completed,
                updated_at = now()
        "#,
    )
    .bind(req.user_id)
    .bind(write_versioned(&req.data))
    .bind(completed)
    .execute(&state.db)
    .await?;

    Ok(Json(IkigaiView {
        data: req.data,
        completed,
    }))
}

/// POST /api/v1/ikigai/insights
///
/// Generates career insights from the saved answers. Requires a complete
/// ikigai, meaning all four categories answered.
pub async fn handle_insights(
    State(state): State<AppState>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<AiContent<CareerInsights>>, AppError> {
    let row =
        sqlx::query_as::<_, IkigaiProgressRow>("SELECT * FROM ikigai_progress WHERE user_id = $1")
            .bind(req.user_id)
            .fetch_optional(&state.db)
            .await?;

    let data: IkigaiData = read_versioned(row.as_ref().map(|r| &r.data));
    if !data.is_complete() {
        return Err(AppError::Validation(
            "Answer all four ikigai categories before requesting insights".to_string(),
        ));
    }

    let insights = generate_career_insights(&state.llm, &data).await?;
    Ok(Json(insights))
}
