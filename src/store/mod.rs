//! The document store the subscribers end up in.
//!
//! Documents are addressed by a caller chosen string key and written with `set`,
//! which replaces whatever was stored under that key before.

mod memory;
mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{StoreBackend, StoreConfig},
    model::Subscriber,
};

#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Writes `subscriber` under `key`, replacing any document already stored there.
    async fn set(&self, key: &str, subscriber: &Subscriber) -> StoreResult<()>;
}

/// Builds the store selected by `backend`, connecting to it if needed.
pub async fn init_store(config: &StoreConfig) -> StoreResult<Arc<dyn SubscriberStore>> {
    let store: Arc<dyn SubscriberStore> = match config.backend {
        StoreBackend::Redis => Arc::new(RedisStore::init(config).await?),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    Ok(store)
}

/// Rejects keys the store can't address a document with.
fn check_key(key: &str) -> StoreResult<()> {
    if key.is_empty() {
        return Err(StoreError::EmptyKey);
    }
    Ok(())
}

// ###################################
// ->   ERROR
// ###################################
pub type StoreResult<T> = core::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document key must not be empty")]
    EmptyKey,
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("redis error: {0}")]
    Redis(#[from] fred::error::Error),
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
