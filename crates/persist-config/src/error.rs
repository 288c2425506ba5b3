//! Errors raised while loading or checking configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse or a value had the wrong type.
    #[error("failed to load configuration: {0}")]
    Figment(Box<figment::Error>),

    /// A remote database section with only one of `url` and `auth_token`.
    #[error("[{section}] is half configured: set both url and auth_token, or neither")]
    NotConfigured { section: String },

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
