use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Industry research record for the Exploration phase.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IndustryResearchRow {
    pub user_id: Uuid,
    pub industries: Vec<String>,
    pub notes: Option<String>,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}
