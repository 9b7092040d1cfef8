use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the format of Provider URL is incorrect ({url}): {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("the host from Provider URL is missing ({url})")]
    MissingHost { url: String },

    #[error("the port from Provider URL is incorrect ({url}): {reason}")]
    InvalidPort { url: String, reason: String },

    #[error("the Type and Protocol spec from Provider URL is incorrect: {scheme}")]
    InvalidScheme { scheme: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
