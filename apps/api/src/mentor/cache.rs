//! Best-effort JSON cache over redis.
//!
//! LLM generations are slow and expensive; identical requests within the
//! TTL are served from cache. Every failure path degrades to a miss with a
//! warning — the cache must never take an endpoint down.

use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

/// Reads and deserializes a cached value. Any error is a miss.
pub async fn get_json<T: DeserializeOwned>(client: &redis::Client, key: &str) -> Option<T> {
    let mut conn = match client.get_multiplexed_async_connection().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Cache unavailable: {e}");
            return None;
        }
    };

    match conn.get::<_, Option<String>>(key).await {
        Ok(Some(raw)) => serde_json::from_str(&raw).ok(),
        Ok(None) => None,
        Err(e) => {
            warn!("Cache read failed for {key}: {e}");
            None
        }
    }
}

/// Serializes and stores a value with a TTL. Failures are logged and dropped.
pub async fn put_json<T: Serialize>(client: &redis::Client, key: &str, value: &T, ttl_secs: u64) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Cache serialization failed for {key}: {e}");
            return;
        }
    };

    let mut conn = match client.get_multiplexed_async_connection().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Cache unavailable: {e}");
            return;
        }
    };

    if let Err(e) = conn.set_ex::<_, _, ()>(key, raw, ttl_secs).await {
        warn!("Cache write failed for {key}: {e}");
    }
}
