use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::{AppConfig, DeploymentConfig},
    store::{self, SubscriberStore},
    Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    /// Initializes every collaborator and binds the listener.
    /// Any failure aborts startup, nothing is served with a partially built state.
    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let store = store::init_store(&config.store_config).await?;

        let app_state = AppState::new(
            store,
            config.deployment,
            config.net_config.signup_path,
            config.net_config.max_body_bytes,
        );

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind the listener to {addr}"))?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub store: Arc<dyn SubscriberStore>,
    pub deployment: DeploymentConfig,
    pub signup_path: String,
    pub max_body_bytes: usize,
}

/// Application state shared by every request.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(
        store: Arc<dyn SubscriberStore>,
        deployment: DeploymentConfig,
        signup_path: String,
        max_body_bytes: usize,
    ) -> Self {
        AppState(Arc::new(InternalState {
            store,
            deployment,
            signup_path,
            max_body_bytes,
        }))
    }
}
