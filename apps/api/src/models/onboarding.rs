use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Saved position in the onboarding wizard. `data` is a versioned blob
/// holding the in-progress `OnboardingData`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OnboardingProgressRow {
    pub user_id: Uuid,
    pub data: Value,
    pub step: i32,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}
