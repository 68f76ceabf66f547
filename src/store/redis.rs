use async_trait::async_trait;
use fred::{
    error::{Error as RedisError, ErrorKind},
    prelude::{ClientLike, Config, KeysInterface, Pool},
    types::Builder,
};
use secrecy::ExposeSecret;
use tracing::info;

use super::{check_key, StoreError, StoreResult, SubscriberStore};
use crate::{config::StoreConfig, model::Subscriber};

/// Keeps every subscriber as a JSON document under `"{collection}:{key}"`.
/// Contains a redis connection pool that is cheaply cloneable.
#[derive(Clone, Debug)]
pub struct RedisStore {
    pool: Pool,
    collection: String,
}

impl RedisStore {
    pub async fn init(config: &StoreConfig) -> StoreResult<Self> {
        info!("{:<20} - Initializing the REDIS client", "init_redis_store");
        let conf = Config::from_url(config.redis_uri.expose_secret())?;
        let connection_timeout = config.connection_timeout();

        let pool = Builder::from_config(conf)
            .with_connection_config(|conn| conn.connection_timeout = connection_timeout)
            .build_pool(config.pool_size)?;

        pool.init().await?;
        info!("connected to REDIS");

        Ok(RedisStore {
            pool,
            collection: config.collection.clone(),
        })
    }

    fn document_key(&self, key: &str) -> String {
        document_key(&self.collection, key)
    }
}

#[async_trait]
impl SubscriberStore for RedisStore {
    async fn set(&self, key: &str, subscriber: &Subscriber) -> StoreResult<()> {
        check_key(key)?;
        let document = serde_json::to_string(subscriber)?;

        self.pool
            .next()
            .set::<(), _, _>(self.document_key(key), document, None, None, false)
            .await
            .map_err(classify)?;

        Ok(())
    }
}

fn document_key(collection: &str, key: &str) -> String {
    format!("{collection}:{key}")
}

/// Connection level failures mean the store could not be reached at all,
/// everything else is reported as is.
fn classify(er: RedisError) -> StoreError {
    match er.kind() {
        ErrorKind::IO | ErrorKind::Timeout | ErrorKind::Canceled => {
            StoreError::Unavailable(er.to_string())
        }
        _ => StoreError::Redis(er),
    }
}
