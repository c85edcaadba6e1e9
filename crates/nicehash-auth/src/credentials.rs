//! Authentication credentials for the NiceHash API
//!
//! Implements the HMAC-SHA256 request signing required by NiceHash's
//! private endpoints.
//!
//! # Security
//!
//! API secrets are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use rand::RngCore;
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Field separator in the canonical signing string.
const SEPARATOR: u8 = 0x00;

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    key: String,
    /// API secret (zeroized on drop)
    secret: SecretBox<String>,
    /// Organization id scoping the key pair
    org_id: String,
}

impl Credentials {
    /// Create new credentials from an API key, secret, and organization id
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        org_id: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            secret: SecretBox::new(Box::new(secret.into())),
            org_id: org_id.into(),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `NICEHASH_API_KEY`, `NICEHASH_API_SECRET`, and
    /// `NICEHASH_ORG_ID` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let key = std::env::var("NICEHASH_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("NICEHASH_API_KEY".to_string()))?;
        let secret = std::env::var("NICEHASH_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("NICEHASH_API_SECRET".to_string()))?;
        let org_id = std::env::var("NICEHASH_ORG_ID")
            .map_err(|_| AuthError::EnvVarNotSet("NICEHASH_ORG_ID".to_string()))?;

        Ok(Self::new(key, secret, org_id))
    }

    /// Create credentials from a file
    ///
    /// The file must contain three lines:
    /// 1. API key
    /// 2. API secret
    /// 3. organization id
    pub fn from_file(path: impl AsRef<std::path::Path>) -> AuthResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut lines = contents.lines();

        let key = lines
            .next()
            .ok_or_else(|| AuthError::InvalidCredentials("missing API key line".to_string()))?;
        let secret = lines
            .next()
            .ok_or_else(|| AuthError::InvalidCredentials("missing API secret line".to_string()))?;
        let org_id = lines.next().ok_or_else(|| {
            AuthError::InvalidCredentials("missing organization id line".to_string())
        })?;

        Ok(Self::new(key.trim(), secret.trim(), org_id.trim()))
    }

    /// Get the API key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the organization id
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Generate a fresh nonce for a request
    ///
    /// 18 bytes from a cryptographically secure source, hex-encoded into a
    /// 36-character token. Doubles as the `X-Request-Id` value.
    pub fn generate_nonce() -> String {
        let mut bytes = [0u8; 18];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Current time as a milliseconds-since-epoch decimal string
    ///
    /// This is the `X-Time` header value and a signed field.
    pub fn timestamp_ms() -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis()
            .to_string()
    }

    /// Sign a request for the NiceHash API
    ///
    /// The canonical message is the null-byte-separated concatenation of:
    /// key, time, nonce, an empty field, org id, an empty field, HTTP
    /// method, URL path, URL query string, and (only when non-empty) the
    /// raw body bytes. The two empty fields are reserved protocol slots and
    /// part of the bit-exact wire contract.
    ///
    /// The message is HMAC-SHA256 signed with the secret and hex-encoded;
    /// the header value is `"{key}:{hex_digest}"`.
    ///
    /// # Arguments
    /// * `time` - milliseconds-since-epoch decimal string (`X-Time`)
    /// * `nonce` - single-use request token (`X-Nonce`)
    /// * `method` - HTTP method, uppercase (e.g. "GET")
    /// * `path` - URL path (e.g. "/main/api/v2/reports/list")
    /// * `query` - URL-encoded query string, without the leading `?`
    /// * `body` - raw request body; empty slice when the request has none
    pub fn sign(
        &self,
        time: &str,
        nonce: &str,
        method: &str,
        path: &str,
        query: &str,
        body: &[u8],
    ) -> String {
        let mut message = Vec::with_capacity(
            self.key.len()
                + time.len()
                + nonce.len()
                + self.org_id.len()
                + method.len()
                + path.len()
                + query.len()
                + body.len()
                + 10,
        );

        message.extend_from_slice(self.key.as_bytes());
        message.push(SEPARATOR);
        message.extend_from_slice(time.as_bytes());
        message.push(SEPARATOR);
        message.extend_from_slice(nonce.as_bytes());
        message.push(SEPARATOR);
        // reserved empty field
        message.push(SEPARATOR);
        message.extend_from_slice(self.org_id.as_bytes());
        message.push(SEPARATOR);
        // reserved empty field
        message.push(SEPARATOR);
        message.extend_from_slice(method.as_bytes());
        message.push(SEPARATOR);
        message.extend_from_slice(path.as_bytes());
        message.push(SEPARATOR);
        message.extend_from_slice(query.as_bytes());
        if !body.is_empty() {
            message.push(SEPARATOR);
            message.extend_from_slice(body);
        }

        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(&message);
        let digest = mac.finalize();

        format!("{}:{}", self.key, hex::encode(digest.into_bytes()))
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretBox with the same content)
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
            org_id: self.org_id.clone(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &format!("{}...", &self.key[..8.min(self.key.len())]))
            .field("secret", &"[REDACTED]")
            .field("org_id", &self.org_id)
            .finish()
    }
}

/// Per-request signing context
///
/// Captures a fresh timestamp and nonce at construction so the exact values
/// placed in the `X-Time`/`X-Nonce` headers are the ones that get signed.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    time: String,
    nonce: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with a fresh timestamp and nonce
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            time: Credentials::timestamp_ms(),
            nonce: Credentials::generate_nonce(),
        }
    }

    /// Get the timestamp for this request
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Get the API key
    pub fn key(&self) -> &str {
        self.credentials.key()
    }

    /// Get the organization id
    pub fn org_id(&self) -> &str {
        self.credentials.org_id()
    }

    /// Compute the `X-Auth` header value for the request
    pub fn auth_header(&self, method: &str, path: &str, query: &str, body: &[u8]) -> String {
        self.credentials
            .sign(&self.time, &self.nonce, method, path, query, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new(
            "4ebd366d-76f4-4400-a3b6-e51515d054d6",
            "fd8a1652-728b-42fe-82b8-f623e56da8850750f5bf-ce66-4ca7-8b84-93651abc723b",
            "da41b3bc-3d0b-4226-b7ea-aee73f94a518",
        )
    }

    #[test]
    fn test_known_signature_vector() {
        let creds = test_credentials();
        let auth = creds.sign(
            "1543597115712",
            "9675d0f8-1325-484b-9594-c9d6d3268890",
            "GET",
            "/main/api/v2/hashpower/orderBook",
            "algorithm=X16R&page=0&size=100",
            b"",
        );
        assert_eq!(
            auth,
            "4ebd366d-76f4-4400-a3b6-e51515d054d6:21e6a16f6eb34ac476d59f969f548b47fffe3fea318d9c99e77fc710d2fed798"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let creds = test_credentials();
        let a = creds.sign("1543597115712", "n", "GET", "/p", "q=1", b"body");
        let b = creds.sign("1543597115712", "n", "GET", "/p", "q=1", b"body");
        assert_eq!(a, b);
    }

    #[test]
    fn test_any_field_change_alters_digest() {
        let creds = test_credentials();
        let base = creds.sign("1543597115712", "n", "GET", "/p", "q=1", b"");

        let variants = [
            creds.sign("1543597115713", "n", "GET", "/p", "q=1", b""),
            creds.sign("1543597115712", "m", "GET", "/p", "q=1", b""),
            creds.sign("1543597115712", "n", "POST", "/p", "q=1", b""),
            creds.sign("1543597115712", "n", "GET", "/q", "q=1", b""),
            creds.sign("1543597115712", "n", "GET", "/p", "q=2", b""),
            creds.sign("1543597115712", "n", "GET", "/p", "q=1", b"x"),
        ];
        for variant in variants {
            assert_ne!(base, variant);
        }

        let other_secret = Credentials::new(
            "4ebd366d-76f4-4400-a3b6-e51515d054d6",
            "another-secret",
            "da41b3bc-3d0b-4226-b7ea-aee73f94a518",
        );
        assert_ne!(
            base,
            other_secret.sign("1543597115712", "n", "GET", "/p", "q=1", b"")
        );

        let other_org = Credentials::new(
            "4ebd366d-76f4-4400-a3b6-e51515d054d6",
            "fd8a1652-728b-42fe-82b8-f623e56da8850750f5bf-ce66-4ca7-8b84-93651abc723b",
            "another-org",
        );
        assert_ne!(
            base,
            other_org.sign("1543597115712", "n", "GET", "/p", "q=1", b"")
        );
    }

    #[test]
    fn test_adding_body_changes_digest() {
        let creds = test_credentials();
        let without = creds.sign("1543597115712", "n", "GET", "/p", "", b"");
        let with = creds.sign("1543597115712", "n", "GET", "/p", "", b"{}");
        assert_ne!(without, with);
    }

    #[test]
    fn test_nonce_shape() {
        let nonce = Credentials::generate_nonce();
        assert_eq!(nonce.len(), 36);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_consecutive_nonces_differ() {
        assert_ne!(Credentials::generate_nonce(), Credentials::generate_nonce());
    }

    #[test]
    fn test_timestamp_is_13_numeric_chars() {
        let ts = Credentials::timestamp_ms();
        assert_eq!(ts.len(), 13);
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "test_secret_value", "test_org");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_secret_value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_request_signer_binds_headers_to_signature() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);
        let auth = signer.auth_header("GET", "/main/api/v2/reports/list", "", b"");
        let expected = creds.sign(
            signer.time(),
            signer.nonce(),
            "GET",
            "/main/api/v2/reports/list",
            "",
            b"",
        );
        assert_eq!(auth, expected);
        assert!(auth.starts_with("4ebd366d-76f4-4400-a3b6-e51515d054d6:"));
    }
}
