pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to build the 'Environment' from the provided string.")]
    StringToEnvironmentFail,
    #[error("{0} environment variable unset or missing")]
    MissingDeploymentVar(&'static str),
    #[error("invalid signup path '{0}': {1}")]
    InvalidSignupPath(String, &'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config extraction error: {0}")]
    Figment(#[from] Box<figment::Error>),
}
