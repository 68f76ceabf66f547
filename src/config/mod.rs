//! Tries to create an `AppConfig` from config files and the process environment.
//! Files from the `config` directory are layered first, `APP_` prefixed environment
//! variables override them, and the deployment identity comes from the variables
//! the hosting platform injects.
//!
//! Loading happens once, at startup, and the result is handed to `App::build_from_config`.

mod data;
mod error;

use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use tracing::info;

// Re-export config structs
pub use data::{AppConfig, DeploymentConfig, Environment, NetConfig, StoreBackend, StoreConfig};
pub use error::{ConfigError, ConfigResult};

pub const APP_ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";
pub const PROJECT_ID_VAR: &str = "GCP_PROJECT";
pub const SERVICE_NAME_VAR: &str = "FUNCTION_NAME";
pub const REGION_VAR: &str = "FUNCTION_REGION";
pub const HEALTH_CHECK_PATH: &str = "/health-check";

impl AppConfig {
    /// Loads the configuration relative to the current working directory.
    /// Fails if any required value is missing, nothing falls back silently.
    pub fn load() -> ConfigResult<Self> {
        let base_path = std::env::current_dir()?;
        let environment: Environment = std::env::var(APP_ENVIRONMENT_VAR)
            .unwrap_or_else(|_| "local".into())
            .try_into()?;

        Self::load_from(base_path.join("config"), environment)
    }

    /// Layers `base.toml`, the environment specific file, `APP_*` overrides and the
    /// deployment variables, then validates the signup path and the deployment identity.
    pub fn load_from(config_dir: impl AsRef<Path>, environment: Environment) -> ConfigResult<Self> {
        info!(
            "{:<20} - Loading the {} configuration",
            "load_config",
            environment.as_ref()
        );
        let config_dir = config_dir.as_ref();
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let config: AppConfig = Figment::new()
            .merge(Toml::file(config_dir.join("base.toml")))
            .merge(Toml::file(config_dir.join(environment_filename)))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(deployment_env())
            .extract()
            .map_err(Box::new)?;

        config.net_config.validate()?;
        config.deployment.validate()?;

        Ok(config)
    }
}

/// Maps the platform provided variables onto the `deployment` section.
fn deployment_env() -> Env {
    Env::raw()
        .only(&[PROJECT_ID_VAR, SERVICE_NAME_VAR, REGION_VAR])
        .map(|key| {
            if key == PROJECT_ID_VAR {
                "deployment.project_id".into()
            } else if key == SERVICE_NAME_VAR {
                "deployment.service_name".into()
            } else {
                "deployment.region".into()
            }
        })
}
