//! Credentials and request signing for the NiceHash API
//!
//! Every private NiceHash endpoint requires an `X-Auth` header proving
//! possession of the API secret. The header is an HMAC-SHA256 digest over a
//! canonical, null-byte-delimited concatenation of the request facts
//! (timestamp, nonce, organization id, method, path, query, body), keyed by
//! the secret and bound to a single-use nonce.
//!
//! # Example
//!
//! ```no_run
//! use nicehash_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     // Sign a request
//!     let signer = RequestSigner::new(&creds);
//!     let auth = signer.auth_header("GET", "/main/api/v2/reports/list", "", b"");
//!     println!("X-Auth: {}", auth);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, RequestSigner};
pub use error::{AuthError, AuthResult};
