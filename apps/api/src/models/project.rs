use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A hands-on learning project suggested for the user during Exploration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectOptionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub icon_name: String,
    pub reasoning: String,
}

/// A persisted learning plan for one project. `plan` is a versioned blob
/// holding `LearningPlan`; `source` records whether the content was model
/// generated or the flagged fallback.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningPlanRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub plan: Value,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// A persisted building-in-public plan for one project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BuildingPlanRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub plan: Value,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Durable exploration state: which project the user selected and whether
/// they have started building in public. Mirrored into the redis cache.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExplorationStateRow {
    pub user_id: Uuid,
    pub selected_project_id: Option<Uuid>,
    pub started_building: bool,
    pub updated_at: DateTime<Utc>,
}
