use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, OnceLock},
};

use anyhow::Result;
use async_trait::async_trait;
use landing::{
    config::DeploymentConfig,
    init_dbg_tracing,
    model::Subscriber,
    store::{MemoryStore, StoreError, StoreResult, SubscriberStore},
    App, AppState,
};
use parking_lot::Mutex;
use reqwest::{Client, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);
pub const MAX_BODY_BYTES: usize = 1024;

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: Client,
    pub store: MemoryStore,
}

impl TestApp {
    /// Spawns the app backed by a fresh `MemoryStore`.
    pub async fn spawn() -> Result<Self> {
        let store = MemoryStore::new();
        let addr = spawn_with_store(Arc::new(store.clone())).await?;

        Ok(TestApp {
            addr,
            http_client: Client::new(),
            store,
        })
    }

    pub fn signup_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub async fn post_signup(&self, body: &Value) -> Result<Response> {
        let res = self
            .http_client
            .post(self.signup_url())
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    pub async fn post_raw(&self, body: &'static str) -> Result<Response> {
        let res = self
            .http_client
            .post(self.signup_url())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Ok(res)
    }
}

/// Serves the app with the given store, returning the address it listens on.
pub async fn spawn_with_store(store: Arc<dyn SubscriberStore>) -> Result<SocketAddr> {
    init_test_subscriber();

    let listener = TcpListener::bind(TEST_SOCK_ADDR).await?;
    let addr = listener.local_addr()?;
    info!("Listening on {addr}");

    tokio::spawn(landing::serve(App::new(test_state(store), listener)));

    Ok(addr)
}

pub fn test_state(store: Arc<dyn SubscriberStore>) -> AppState {
    AppState::new(store, test_deployment(), "/".into(), MAX_BODY_BYTES)
}

pub fn test_deployment() -> DeploymentConfig {
    DeploymentConfig {
        project_id: "landing-test".into(),
        service_name: "subscribe".into(),
        region: "local".into(),
    }
}

fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

// ###################################
// ->   FAKE STORES
// ###################################
/// A store whose every write fails with `Unavailable(message)`.
/// Counts the attempts so tests can check nothing was retried.
#[derive(Debug)]
pub struct FailingStore {
    message: &'static str,
    pub attempts: Mutex<Vec<String>>,
}

impl FailingStore {
    pub fn new(message: &'static str) -> Self {
        FailingStore {
            message,
            attempts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SubscriberStore for FailingStore {
    async fn set(&self, key: &str, _subscriber: &Subscriber) -> StoreResult<()> {
        self.attempts.lock().push(key.to_owned());
        Err(StoreError::Unavailable(self.message.to_owned()))
    }
}
