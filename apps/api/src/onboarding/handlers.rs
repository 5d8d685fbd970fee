//! Axum route handlers for the onboarding wizard and the resulting profile.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::journey::navigation::StepNavigator;
use crate::models::onboarding::OnboardingProgressRow;
use crate::models::profile::ProfileRow;
use crate::models::versioned::{read_versioned, write_versioned};
use crate::onboarding::forms::{validate_through, OnboardingData, ONBOARDING_STEPS};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct OnboardingView {
    pub data: OnboardingData,
    pub step: usize,
    pub total_steps: usize,
    pub step_key: &'static str,
    pub step_title: &'static str,
    pub can_go_back: bool,
    pub forward_label: &'static str,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct AdvanceRequest {
    pub user_id: Uuid,
    pub data: OnboardingData,
}

#[derive(Debug, Deserialize)]
pub struct BackRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpsertRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub data: OnboardingData,
}

/// GET /api/v1/onboarding
///
/// Returns the saved wizard position and data. An absent record is not an
/// error: a fresh user simply starts at step 0 with empty data.
pub async fn handle_get_onboarding(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<OnboardingView>, AppError> {
    let row = fetch_progress(&state.db, params.user_id).await?;
    Ok(Json(view_from_row(row)))
}

/// POST /api/v1/onboarding/advance
///
/// Validates every step through the current one (each advance persists the
/// whole submitted form, so earlier steps must still hold), then moves
/// forward one step. Advancing off the final step marks onboarding complete
/// and upserts the user profile from the collected data.
pub async fn handle_advance(
    State(state): State<AppState>,
    Json(req): Json<AdvanceRequest>,
) -> Result<Json<OnboardingView>, AppError> {
    let row = fetch_progress(&state.db, req.user_id).await?;
    let (step, mut completed) = match &row {
        Some(r) => (r.step.max(0) as usize, r.completed),
        None => (0, false),
    };

    let mut nav = StepNavigator::resume(step, ONBOARDING_STEPS.len());

    let missing = validate_through(nav.index(), &req.data);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    if nav.is_last() {
        completed = true;
        upsert_profile(&state.db, req.user_id, &req.data).await?;
    } else {
        nav.advance(true);
    }

    let saved = upsert_progress(&state.db, req.user_id, &req.data, nav.index(), completed).await?;
    Ok(Json(view_from_row(Some(saved))))
}

/// POST /api/v1/onboarding/back
///
/// Bounded decrement; a no-op at step 0.
pub async fn handle_back(
    State(state): State<AppState>,
    Json(req): Json<BackRequest>,
) -> Result<Json<OnboardingView>, AppError> {
    let row = fetch_progress(&state.db, req.user_id).await?;
    let Some(row) = row else {
        // Nothing saved yet, nowhere to go back to.
        return Ok(Json(view_from_row(None)));
    };

    let data: OnboardingData = read_versioned(Some(&row.data));
    let mut nav = StepNavigator::resume(row.step.max(0) as usize, ONBOARDING_STEPS.len());
    nav.back();

    let saved = upsert_progress(&state.db, req.user_id, &data, nav.index(), row.completed).await?;
    Ok(Json(view_from_row(Some(saved))))
}

/// GET /api/v1/profile
///
/// "Not found" is a non-error: returns null for users who have not
/// completed onboarding.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Option<ProfileRow>>, AppError> {
    let profile = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(params.user_id)
        .fetch_optional(&state.db)
        .await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
///
/// Direct profile upsert for edits after onboarding. All wizard steps must
/// validate. This is the one place the whole form is checked at once.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileUpsertRequest>,
) -> Result<Json<ProfileRow>, AppError> {
    let missing = validate_through(ONBOARDING_STEPS.len() - 1, &req.data);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let profile = upsert_profile(&state.db, req.user_id, &req.data).await?;
    Ok(Json(profile))
}

async fn fetch_progress(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<OnboardingProgressRow>, AppError> {
    Ok(sqlx::query_as::<_, OnboardingProgressRow>(
        "SELECT * FROM onboarding_progress WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}

async fn upsert_progress(
    pool: &PgPool,
    user_id: Uuid,
    data: &OnboardingData,
    step: usize,
    completed: bool,
) -> Result<OnboardingProgressRow, AppError> {
    Ok(sqlx::query_as::<_, OnboardingProgressRow>(
        r#"
        INSERT INTO onboarding_progress (user_id, data, step, completed, updated_at)
        VALUES ($1, $2, $3, $4, now())
        ON CONFLICT (user_id) DO UPDATE
            SET data = EXCLUDED.data,
                step = EXCLUDED.step,
                completed = onboarding_progress.completed OR EXCLUDED.completed,
                updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(write_versioned(data))
    .bind(step as i32)
    .bind(completed)
    .fetch_one(pool)
    .await?)
}

async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    data: &OnboardingData,
) -> Result<ProfileRow, AppError> {
    Ok(sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles
            (user_id, full_name, email, role_title, experience, background,
             ai_interest, goals, timeline, linkedin_url, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, now())
        ON CONFLICT (user_id) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                email = EXCLUDED.email,
                role_title = EXCLUDED.role_title,
                experience = EXCLUDED.experience,
                background = EXCLUDED.background,
                ai_interest = EXCLUDED.ai_interest,
                goals = EXCLUDED.goals,
                timeline = EXCLUDED.timeline,
                linkedin_url = EXCLUDED.linkedin_url,
                updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&data.full_name)
    .bind(&data.email)
    .bind(&data.current_role)
    .bind(&data.experience)
    .bind(&data.background)
    .bind(&data.ai_interest)
    .bind(&data.goals)
    .bind(&data.timeline)
    .bind(&data.linkedin_url)
    .fetch_one(pool)
    .await?)
}

fn view_from_row(row: Option<OnboardingProgressRow>) -> OnboardingView {
    let (data, step, completed) = match row {
        Some(r) => (
            read_versioned(Some(&r.data)),
            r.step.max(0) as usize,
            r.completed,
        ),
        None => (OnboardingData::default(), 0, false),
    };

    let nav = StepNavigator::resume(step, ONBOARDING_STEPS.len());
    let def = ONBOARDING_STEPS[nav.index()];

    OnboardingView {
        data,
        step: nav.index(),
        total_steps: nav.total(),
        step_key: def.key,
        step_title: def.title,
        can_go_back: nav.can_go_back(),
        forward_label: nav.forward_label(),
        completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_view_starts_at_step_zero() {
        let view = view_from_row(None);
        assert_eq!(view.step, 0);
        assert!(!view.can_go_back);
        assert_eq!(view.forward_label, "Continue");
        assert!(!view.completed);
        assert_eq!(view.data, OnboardingData::default());
    }

    #[test]
    fn test_view_on_final_step_offers_complete() {
        let row = OnboardingProgressRow {
            user_id: Uuid::new_v4(),
            data: write_versioned(&OnboardingData::default()),
            step: (ONBOARDING_STEPS.len() - 1) as i32,
            completed: false,
            updated_at: chrono::Utc::now(),
        };
        let view = view_from_row(Some(row));
        assert_eq!(view.forward_label, "Complete");
        assert!(view.can_go_back);
    }

    #[test]
    fn test_view_survives_malformed_blob() {
        let row = OnboardingProgressRow {
            user_id: Uuid::new_v4(),
            data: serde_json::json!({"legacy": true}),
            step: 2,
            completed: false,
            updated_at: chrono::Utc::now(),
        };
        let view = view_from_row(Some(row));
        assert_eq!(view.data, OnboardingData::default());
        assert_eq!(view.step, 2);
    }
}
