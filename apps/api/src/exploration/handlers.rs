//! Axum route handlers for the Exploration phase: industry research,
//! project options, plans, building in public, and progress aggregation.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::exploration::cache;
use crate::exploration::plans::{
    generate_building_plan, generate_learning_plan, generate_project_options,
    generate_social_post, insert_building_plan, insert_learning_plan, insert_project_options,
    BuildingPlan, LearningPlan, SocialPost,
};
use crate::exploration::progress::{overall_completion, progress_map, project_completion};
use crate::llm_client::{AiContent, ContentSource};
use crate::models::profile::ProfileRow;
use crate::models::project::{ExplorationStateRow, ProjectOptionRow};
use crate::models::research::IndustryResearchRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UserIdBody {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Industry research
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResearchUpsertRequest {
    pub user_id: Uuid,
    pub industries: Vec<String>,
    pub notes: Option<String>,
    pub completed: bool,
}

/// GET /api/v1/research
pub async fn handle_get_research(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Option<IndustryResearchRow>>, AppError> {
    let row = sqlx::query_as::<_, IndustryResearchRow>(
        "SELECT * FROM industry_research WHERE user_id = $1",
    )
    .bind(params.user_id)
    .fetch_optional(&state.db)
    .await?;
    Ok(Json(row))
}

/// PUT /api/v1/research
///
/// Marking research complete requires at least one researched industry.
pub async fn handle_put_research(
    State(state): State<AppState>,
    Json(req): Json<ResearchUpsertRequest>,
) -> Result<Json<IndustryResearchRow>, AppError> {
    if req.completed && req.industries.iter().all(|i| i.trim().is_empty()) {
        return Err(AppError::Validation(
            "Cannot mark research complete without any researched industries".to_string(),
        ));
    }

    let row = sqlx::query_as::<_, IndustryResearchRow>(
        r#"
        INSERT INTO industry_research (user_id, industries, notes, completed, updated_at)
        VALUES ($1, $2, $3, $4, now())
        ON CONFLICT (user_id) DO UPDATE
            SET industries = EXCLUDED.industries,
                notes = EXCLUDED.notes,
                completed = EXCLUDED.completed,
                updated_at = now()
        RETURNING *
        "#,
    )
    .bind(req.user_id)
    .bind(&req.industries)
    .bind(&req.notes)
    .bind(req.completed)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

// ────────────────────────────────────────────────────────────────────────────
// Project options
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: ProjectOptionRow,
    pub selected: bool,
    pub completion: u8,
}

#[derive(Debug, Serialize)]
pub struct GenerateProjectsResponse {
    pub projects: Vec<ProjectOptionRow>,
    pub source: ContentSource,
}

/// GET /api/v1/projects
///
/// Project options with the per-user selection flag and each project's
/// independent completion percentage.
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ProjectView>>, AppError> {
    let projects = sqlx::query_as::<_, ProjectOptionRow>(
        "SELECT * FROM project_options WHERE user_id = $1 ORDER BY name",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    let exploration = load_state(&state, params.user_id).await?;
    let map = progress_map(
        exploration.selected_project_id,
        &plan_project_ids(&state.db, params.user_id, "learning_plans").await?,
        &plan_project_ids(&state.db, params.user_id, "building_in_public_plans").await?,
    );

    let views = projects
        .into_iter()
        .map(|project| {
            let progress = map.get(&project.id).copied().unwrap_or_default();
            ProjectView {
                selected: exploration.selected_project_id == Some(project.id),
                completion: project_completion(progress),
                project,
            }
        })
        .collect();

    Ok(Json(views))
}

/// POST /api/v1/projects/generate
///
/// Generates personalized project options from the user's profile and
/// persists them. Requires a completed onboarding profile.
pub async fn handle_generate_projects(
    State(state): State<AppState>,
    Json(req): Json<UserIdBody>,
) -> Result<Json<GenerateProjectsResponse>, AppError> {
    let profile = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(req.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::Validation(
                "Complete onboarding before generating project options".to_string(),
            )
        })?;

    let generated = generate_project_options(&state.llm, &profile).await?;
    let rows = insert_project_options(&state.db, req.user_id, &generated.content.projects).await?;

    Ok(Json(GenerateProjectsResponse {
        projects: rows,
        source: generated.source,
    }))
}

/// POST /api/v1/projects/:id/select
pub async fn handle_select_project(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<UserIdBody>,
) -> Result<Json<ExplorationStateRow>, AppError> {
    require_project(&state.db, req.user_id, project_id).await?;

    let row = upsert_state(&state.db, req.user_id, Some(project_id), false).await?;
    cache::write_state(
        &state.redis,
        req.user_id,
        row.selected_project_id,
        row.started_building,
    )
    .await;

    Ok(Json(row))
}

// ────────────────────────────────────────────────────────────────────────────
// Plans and building in public
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LearningPlanResponse {
    pub plan_id: Uuid,
    pub project_id: Uuid,
    pub plan: LearningPlan,
    pub source: ContentSource,
}

#[derive(Debug, Serialize)]
pub struct BuildingPlanResponse {
    pub plan_id: Uuid,
    pub project_id: Uuid,
    pub plan: BuildingPlan,
    pub source: ContentSource,
}

#[derive(Debug, Deserialize)]
pub struct SocialPostRequest {
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub update: String,
}

/// POST /api/v1/projects/:id/learning-plan
pub async fn handle_learning_plan(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<UserIdBody>,
) -> Result<Json<LearningPlanResponse>, AppError> {
    let project = require_project(&state.db, req.user_id, project_id).await?;

    let plan = generate_learning_plan(&state.llm, &project).await?;
    let row = insert_learning_plan(&state.db, req.user_id, project_id, &plan).await?;

    Ok(Json(LearningPlanResponse {
        plan_id: row.id,
        project_id,
        plan: plan.content,
        source: plan.source,
    }))
}

/// POST /api/v1/projects/:id/building-plan
///
/// Also flips the durable started-building flag and writes it through to
/// the cache.
pub async fn handle_building_plan(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<UserIdBody>,
) -> Result<Json<BuildingPlanResponse>, AppError> {
    let project = require_project(&state.db, req.user_id, project_id).await?;

    let plan = generate_building_plan(&state.llm, &project).await?;
    let row = insert_building_plan(&state.db, req.user_id, project_id, &plan).await?;

    let saved = upsert_state(&state.db, req.user_id, None, true).await?;
    cache::write_state(
        &state.redis,
        req.user_id,
        saved.selected_project_id,
        saved.started_building,
    )
    .await;

    Ok(Json(BuildingPlanResponse {
        plan_id: row.id,
        project_id,
        plan: plan.content,
        source: plan.source,
    }))
}

/// POST /api/v1/building/post
///
/// Drafts a social post from a progress update. Nothing is persisted.
pub async fn handle_social_post(
    State(state): State<AppState>,
    Json(req): Json<SocialPostRequest>,
) -> Result<Json<AiContent<SocialPost>>, AppError> {
    if req.update.trim().is_empty() {
        return Err(AppError::Validation("update cannot be empty".to_string()));
    }

    let project = require_project(&state.db, req.user_id, req.project_id).await?;
    let post = generate_social_post(&state.llm, &project.name, &req.update).await?;
    Ok(Json(post))
}

// ────────────────────────────────────────────────────────────────────────────
// Progress aggregation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectProgressView {
    pub project_id: Uuid,
    pub learning_plan: bool,
    pub building_plan: bool,
    pub completion: u8,
}

#[derive(Debug, Serialize)]
pub struct ExplorationProgressResponse {
    pub overall: u8,
    pub selected_project_id: Option<Uuid>,
    pub started_building: bool,
    pub projects: Vec<ProjectProgressView>,
}

/// GET /api/v1/exploration/progress
///
/// Exploration state is read through the cache; plan records come from
/// Postgres. The percentages are pure functions of the assembled mapping.
pub async fn handle_exploration_progress(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ExplorationProgressResponse>, AppError> {
    let exploration = load_state(&state, params.user_id).await?;

    let learning = plan_project_ids(&state.db, params.user_id, "learning_plans").await?;
    let building = plan_project_ids(&state.db, params.user_id, "building_in_public_plans").await?;

    let map = progress_map(exploration.selected_project_id, &learning, &building);

    let projects = map
        .iter()
        .map(|(project_id, progress)| ProjectProgressView {
            project_id: *project_id,
            learning_plan: progress.learning_plan,
            building_plan: progress.building_plan,
            completion: project_completion(*progress),
        })
        .collect();

    Ok(Json(ExplorationProgressResponse {
        overall: overall_completion(&map),
        selected_project_id: exploration.selected_project_id,
        started_building: exploration.started_building,
        projects,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

/// Loads exploration state, cache first. A database hit repopulates the
/// cache; a user with no record at all gets the empty default.
async fn load_state(
    state: &AppState,
    user_id: Uuid,
) -> Result<cache::CachedExplorationState, AppError> {
    if let Some(cached) = cache::read_state(&state.redis, user_id).await {
        return Ok(cached);
    }

    let row = sqlx::query_as::<_, ExplorationStateRow>(
        "SELECT * FROM exploration_state WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?;

    let loaded = match row {
        Some(r) => {
            cache::write_state(&state.redis, user_id, r.selected_project_id, r.started_building)
                .await;
            cache::CachedExplorationState {
                selected_project_id: r.selected_project_id,
                started_building: r.started_building,
            }
        }
        None => cache::CachedExplorationState {
            selected_project_id: None,
            started_building: false,
        },
    };

    Ok(loaded)
}

/// Merge-upserts exploration state: a new selection replaces the old one,
/// and started_building latches once set.
async fn upsert_state(
    pool: &PgPool,
    user_id: Uuid,
    selected_project_id: Option<Uuid>,
    started_building: bool,
) -> Result<ExplorationStateRow, AppError> {
    Ok(sqlx::query_as::<_, ExplorationStateRow>(
        r#"
        INSERT INTO exploration_state (user_id, selected_project_id, started_building, updated_at)
        VALUES ($1, $2, $3, now())
        ON CONFLICT (user_id) DO UPDATE
            SET selected_project_id =
                    COALESCE(EXCLUDED.selected_project_id, exploration_state.selected_project_id),
                started_building = exploration_state.started_building OR EXCLUDED.started_building,
                updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(selected_project_id)
    .bind(started_building)
    .fetch_one(pool)
    .await?)
}

async fn require_project(
    pool: &PgPool,
    user_id: Uuid,
    project_id: Uuid,
) -> Result<ProjectOptionRow, AppError> {
    sqlx::query_as::<_, ProjectOptionRow>(
        "SELECT * FROM project_options WHERE id = $1 AND user_id = $2",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))
}

/// Distinct project ids that have a plan row in the given table.
async fn plan_project_ids(
    pool: &PgPool,
    user_id: Uuid,
    table: &str,
) -> Result<Vec<Uuid>, AppError> {
    // `table` is one of two compile-time constants, never user input.
    let sql = format!("SELECT DISTINCT project_id FROM {table} WHERE user_id = $1");
    Ok(sqlx::query_scalar(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exploration::progress::ProjectProgress;

    #[test]
    fn test_progress_view_percentages_match_flags() {
        let view = ProjectProgressView {
            project_id: Uuid::new_v4(),
            learning_plan: true,
            building_plan: false,
            completion: project_completion(ProjectProgress {
                learning_plan: true,
                building_plan: false,
            }),
        };
        assert_eq!(view.completion, 50);
    }
}
