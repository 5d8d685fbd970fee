//! Key-value cache for exploration state, consulted ahead of Postgres.
//!
//! Two keys per user: the selected project id and the started-building flag.
//! The cache is best effort: any redis failure degrades to the database
//! with a warning, it never fails a request.

use redis::{AsyncCommands, Client};
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedExplorationState {
    pub selected_project_id: Option<Uuid>,
    pub started_building: bool,
}

fn selected_project_key(user_id: Uuid) -> String {
    format!("exploration:{user_id}:selected_project")
}

fn started_building_key(user_id: Uuid) -> String {
    format!("exploration:{user_id}:started_building")
}

/// Reads the cached exploration state. `None` means cache miss (or a cache
/// failure), in which case the caller falls back to Postgres.
pub async fn read_state(redis: &Client, user_id: Uuid) -> Option<CachedExplorationState> {
    let result = async {
        let mut conn = redis.get_multiplexed_async_connection().await?;
        let selected: Option<String> = conn.get(selected_project_key(user_id)).await?;
        let started: Option<String> = conn.get(started_building_key(user_id)).await?;
        redis::RedisResult::Ok((selected, started))
    }
    .await;

    match result {
        Ok((None, None)) => None,
        Ok((selected, started)) => Some(CachedExplorationState {
            // An unparseable cached id is treated as a miss for that field.
            selected_project_id: selected.and_then(|s| Uuid::parse_str(&s).ok()),
            started_building: started.as_deref() == Some("1"),
        }),
        Err(e) => {
            warn!("Exploration cache read failed, falling back to database: {e}");
            None
        }
    }
}

/// Writes the exploration state through to the cache. Failures are logged
/// and swallowed; Postgres remains the source of truth.
pub async fn write_state(
    redis: &Client,
    user_id: Uuid,
    selected_project_id: Option<Uuid>,
    started_building: bool,
) {
    let result = async {
        let mut conn = redis.get_multiplexed_async_connection().await?;
        match selected_project_id {
            Some(id) => {
                let _: () = conn.set(selected_project_key(user_id), id.to_string()).await?;
            }
            None => {
                let _: () = conn.del(selected_project_key(user_id)).await?;
            }
        }
        let _: () = conn
            .set(
                started_building_key(user_id),
                if started_building { "1" } else { "0" },
            )
            .await?;
        redis::RedisResult::Ok(())
    }
    .await;

    if let Err(e) = result {
        warn!("Exploration cache write failed (state persists in database): {e}");
    }
}
