use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// No ambient singletons: everything a handler touches is threaded through here.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Key-value cache consulted ahead of Postgres for exploration state.
    pub redis: RedisClient,
    pub llm: LlmClient,
}
