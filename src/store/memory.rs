use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{check_key, StoreResult, SubscriberStore};
use crate::model::Subscriber;

/// Process local store, cheaply cloneable.
/// Every clone shares the same documents.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    docs: Arc<RwLock<HashMap<String, Subscriber>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Subscriber> {
        self.docs.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }
}

#[async_trait]
impl SubscriberStore for MemoryStore {
    async fn set(&self, key: &str, subscriber: &Subscriber) -> StoreResult<()> {
        check_key(key)?;
        self.docs.write().insert(key.to_owned(), subscriber.clone());
        Ok(())
    }
}
