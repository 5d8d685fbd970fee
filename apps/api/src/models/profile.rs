use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The user profile assembled by the onboarding wizard.
/// The resume file stays on the user's device and is never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    // Column is role_title: CURRENT_ROLE is a reserved word in Postgres.
    #[sqlx(rename = "role_title")]
    pub current_role: String,
    pub experience: String,
    pub background: String,
    pub ai_interest: String,
    pub goals: Vec<String>,
    pub timeline: String,
    pub linkedin_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}
