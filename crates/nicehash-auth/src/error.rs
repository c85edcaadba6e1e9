//! Error types for credential handling

/// Errors that can occur while loading credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Credentials file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Credentials are malformed
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;
