use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// How urgently the user is tracking a firm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Category of an alert produced by the (external) alert pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    JobPosting,
    News,
    PeopleUpdate,
    Funding,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::JobPosting => "job_posting",
            AlertType::News => "news",
            AlertType::PeopleUpdate => "people_update",
            AlertType::Funding => "funding",
        }
    }
}

/// A company the user is tracking for job-search alerts.
/// Created by user action; the only mutation is the alerts_enabled toggle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TargetFirmRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    pub priority: String,
    pub alerts_enabled: bool,
    pub website: Option<String>,
    pub last_update: DateTime<Utc>,
}

/// A single alert attached to a target firm.
/// The only mutation after ingestion is the read/unread flip.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlertRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub firm_id: Uuid,
    pub firm_name: String,
    pub alert_type: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub action_url: Option<String>,
}
