use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("security is enabled but no token validator was configured")]
    MissingValidator,

    #[error("JWT validation failed: {0}")]
    Validation(String),

    #[error("JWT signing failed: {0}")]
    Signing(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
