use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Saved ikigai answers. `data` is a versioned blob holding `IkigaiData`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IkigaiProgressRow {
    pub user_id: Uuid,
    pub data: Value,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}
