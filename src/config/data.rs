//! The configuration structs used to build the AppConfig, and their impls.
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::{
    ConfigError, ConfigResult, HEALTH_CHECK_PATH, PROJECT_ID_VAR, REGION_VAR, SERVICE_NAME_VAR,
};

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub store_config: StoreConfig,
    #[serde(default)]
    pub deployment: DeploymentConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
    pub signup_path: String,
    pub max_body_bytes: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub redis_uri: SecretString,
    pub collection: String,
    pub pool_size: usize,
    pub connection_timeout_millis: u64,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Redis,
    Memory,
}

/// Identity of the running deployment: the cloud project, the service name and its region.
/// Every field is required, an empty value counts as missing.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DeploymentConfig {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub region: String,
}

// ###################################
// ->   IMPLs
// ###################################
impl NetConfig {
    /// The signup path has to be routable and must not shadow the health check.
    pub fn validate(&self) -> ConfigResult<()> {
        let path = self.signup_path.as_str();
        let invalid = |reason| Err(ConfigError::InvalidSignupPath(path.to_owned(), reason));

        if !path.starts_with('/') {
            return invalid("must start with '/'");
        }
        if path == HEALTH_CHECK_PATH {
            return invalid("clashes with the health check route");
        }
        Ok(())
    }
}

impl StoreConfig {
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_millis)
    }
}

impl DeploymentConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let required = [
            (PROJECT_ID_VAR, &self.project_id),
            (SERVICE_NAME_VAR, &self.service_name),
            (REGION_VAR, &self.region),
        ];

        match required.into_iter().find(|(_, val)| val.trim().is_empty()) {
            Some((var, _)) => Err(ConfigError::MissingDeploymentVar(var)),
            None => Ok(()),
        }
    }
}

// ###################################
// ->   TRY FROMs
// ###################################
impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail),
        }
    }
}
