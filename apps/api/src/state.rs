use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::catalog::repository::CareerRepository;
use crate::llm_client::LlmClient;
use crate::roadmap::clock::Clock;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis client for best-effort caching of expensive LLM generations.
    pub redis: RedisClient,
    pub llm: LlmClient,
    /// Career catalog store. The matcher itself never touches storage;
    /// handlers read the catalog through this seam.
    pub careers: Arc<dyn CareerRepository>,
    /// Wall-clock seam for placement-date computation.
    pub clock: Arc<dyn Clock>,
}
