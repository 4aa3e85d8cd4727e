use thiserror::Error;

/// Configuration problems detected during startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    ///
    /// Results in a startup failure; the server cannot run without it.
    #[error("Missing required environment variable '{0}'")]
    MissingEnvVar(String),
}
