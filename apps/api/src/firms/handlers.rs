//! Axum route handlers for target firms and their alerts (Action phase).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::firm::{AlertRow, AlertType, Priority, TargetFirmRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct AlertListQuery {
    pub user_id: Uuid,
    #[serde(default)]
    pub unread_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateFirmRequest {
    pub user_id: Uuid,
    pub name: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    pub priority: Priority,
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleAlertsRequest {
    pub user_id: Uuid,
    pub alerts_enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct IngestAlertRequest {
    pub user_id: Uuid,
    pub firm_id: Uuid,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub description: String,
    pub action_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub user_id: Uuid,
    pub is_read: bool,
}

/// GET /api/v1/firms
pub async fn handle_list_firms(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<TargetFirmRow>>, AppError> {
    let firms = sqlx::query_as::<_, TargetFirmRow>(
        "SELECT * FROM target_firms WHERE user_id = $1 ORDER BY last_update DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(firms))
}

/// POST /api/v1/firms
pub async fn handle_create_firm(
    State(state): State<AppState>,
    Json(req): Json<CreateFirmRequest>,
) -> Result<Json<TargetFirmRow>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let firm = sqlx::query_as::<_, TargetFirmRow>(
        r#"
        INSERT INTO target_firms
            (id, user_id, name, industry, size, location, priority,
             alerts_enabled, website, last_update)
        VALUES ($1, $2, $3, $4, $5, $6, $7, true, $8, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(&req.name)
    .bind(&req.industry)
    .bind(&req.size)
    .bind(&req.location)
    .bind(req.priority.as_str())
    .bind(&req.website)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(firm))
}

/// PATCH /api/v1/firms/:id/alerts
///
/// The only mutation a firm supports: toggling alert delivery.
pub async fn handle_toggle_alerts(
    State(state): State<AppState>,
    Path(firm_id): Path<Uuid>,
    Json(req): Json<ToggleAlertsRequest>,
) -> Result<Json<TargetFirmRow>, AppError> {
    let firm = sqlx::query_as::<_, TargetFirmRow>(
        r#"
        UPDATE target_firms
        SET alerts_enabled = $1, last_update = now()
        WHERE id = $2 AND user_id = $3
        RETURNING *
        "#,
    )
    .bind(req.alerts_enabled)
    .bind(firm_id)
    .bind(req.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Firm {firm_id} not found")))?;

    Ok(Json(firm))
}

/// GET /api/v1/alerts
pub async fn handle_list_alerts(
    State(state): State<AppState>,
    Query(params): Query<AlertListQuery>,
) -> Result<Json<Vec<AlertRow>>, AppError> {
    let alerts = sqlx::query_as::<_, AlertRow>(
        r#"
        SELECT * FROM alerts
        WHERE user_id = $1 AND (NOT $2 OR NOT is_read)
        ORDER BY timestamp DESC
        "#,
    )
    .bind(params.user_id)
    .bind(params.unread_only)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(alerts))
}

/// POST /api/v1/alerts
///
/// Ingestion endpoint for the external alert pipeline. Alerts for firms
/// with delivery toggled off are rejected rather than silently stored.
pub async fn handle_ingest_alert(
    State(state): State<AppState>,
    Json(req): Json<IngestAlertRequest>,
) -> Result<Json<AlertRow>, AppError> {
    let firm = sqlx::query_as::<_, TargetFirmRow>(
        "SELECT * FROM target_firms WHERE id = $1 AND user_id = $2",
    )
    .bind(req.firm_id)
    .bind(req.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Firm {} not found", req.firm_id)))?;

    if !firm.alerts_enabled {
        return Err(AppError::Validation(format!(
            "Alerts are disabled for firm {}",
            firm.name
        )));
    }

    let alert = sqlx::query_as::<_, AlertRow>(
        r#"
        INSERT INTO alerts
            (id, user_id, firm_id, firm_name, alert_type, title, description,
             timestamp, is_read, action_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, now(), false, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(req.firm_id)
    .bind(&firm.name)
    .bind(req.alert_type.as_str())
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.action_url)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(alert))
}

/// PATCH /api/v1/alerts/:id/read
///
/// The only mutation an alert supports: the read/unread flip.
pub async fn handle_mark_read(
    State(state): State<AppState>,
    Path(alert_id): Path<Uuid>,
    Json(req): Json<MarkReadRequest>,
) -> Result<Json<AlertRow>, AppError> {
    let alert = sqlx::query_as::<_, AlertRow>(
        r#"
        UPDATE alerts
        SET is_read = $1
        WHERE id = $2 AND user_id = $3
        RETURNING *
        "#,
    )
    .bind(req.is_read)
    .bind(alert_id)
    .bind(req.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Alert {alert_id} not found")))?;

    Ok(Json(alert))
}
