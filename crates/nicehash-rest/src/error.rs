//! Error types for REST API operations

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The underlying HTTP exchange failed (network, DNS, TLS, timeout)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response status was outside the expected set
    #[error("unexpected response code: {code}")]
    UnexpectedStatus {
        /// Actual status code returned by the service
        code: u16,
    },

    /// Response body was not the expected JSON shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Credentials could not be loaded
    #[error(transparent)]
    Auth(#[from] nicehash_auth::AuthError),
}

impl RestError {
    /// Check the response status against the set of expected codes
    ///
    /// Returns `UnexpectedStatus` carrying the actual code when it is not
    /// in the set.
    pub fn check_status(code: u16, expected: &[u16]) -> RestResult<()> {
        if expected.contains(&code) {
            Ok(())
        } else {
            Err(RestError::UnexpectedStatus { code })
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
