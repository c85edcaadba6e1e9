//! Main REST client implementation

use nicehash_auth::Credentials;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::endpoints::{AccountingEndpoints, ReportEndpoints};
use crate::error::RestResult;
use crate::types::{Account, ReportMetadata, ReportRequestSpec};

/// Production API host; all endpoint paths are relative to it
pub const DEFAULT_API_BASE: &str = "https://api2.nicehash.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// NiceHash REST API client
///
/// Owns immutable [`Credentials`] and a pooled HTTP client; safe to clone
/// and share across tasks. Each call performs exactly one signed
/// request/response round trip; retries are the caller's concern.
///
/// # Example
///
/// ```no_run
/// use nicehash_rest::{Credentials, NiceHashClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = NiceHashClient::new(creds);
///
///     let account = client.get_account("BTC", false).await?;
///     println!("available: {}", account.available);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct NiceHashClient {
    http_client: Client,
    credentials: Credentials,
    base_url: String,
}

impl NiceHashClient {
    /// Create a new client with the default configuration
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client with credentials read from the environment
    ///
    /// See [`Credentials::from_env`] for the variable names.
    pub fn from_env() -> RestResult<Self> {
        Ok(Self::new(Credentials::from_env()?))
    }

    /// Create a client with credentials read from a three-line file
    /// (key, secret, org id)
    pub fn from_file(path: impl AsRef<std::path::Path>) -> RestResult<Self> {
        Ok(Self::new(Credentials::from_file(path)?))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(
                config
                    .user_agent
                    .as_deref()
                    .unwrap_or("nicehash-rest/0.1.0"),
            )
            .build()
            .expect("Failed to create HTTP client");

        info!("Created NiceHash REST client");

        Self {
            http_client,
            credentials: config.credentials,
            base_url: config.base_url,
        }
    }

    /// Create a client around an existing HTTP client
    ///
    /// Use this to supply a transport with custom pooling, proxy, or
    /// timeout behavior.
    pub fn with_http_client(credentials: Credentials, http_client: Client) -> Self {
        Self {
            http_client,
            credentials,
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Get accounting endpoints
    pub fn accounting(&self) -> AccountingEndpoints<'_> {
        AccountingEndpoints::new(&self.http_client, &self.credentials, &self.base_url)
    }

    /// Get report endpoints
    pub fn reports(&self) -> ReportEndpoints<'_> {
        ReportEndpoints::new(&self.http_client, &self.credentials, &self.base_url)
    }

    /// Get the balance snapshot for a currency account
    pub async fn get_account(&self, currency: &str, extended: bool) -> RestResult<Account> {
        self.accounting().get_account(currency, extended).await
    }

    /// Request generation of a new report
    pub async fn create_report(&self, spec: &ReportRequestSpec) -> RestResult<()> {
        self.reports().create_report(spec).await
    }

    /// List report metadata
    pub async fn list_reports(&self) -> RestResult<Vec<ReportMetadata>> {
        self.reports().list_reports().await
    }

    /// Download a generated report as raw CSV bytes
    pub async fn download_report(&self, id: &str) -> RestResult<Vec<u8>> {
        self.reports().download_report(id).await
    }

    /// Delete a report by id
    pub async fn delete_report(&self, id: &str) -> RestResult<()> {
        self.reports().delete_report(id).await
    }
}

impl std::fmt::Debug for NiceHashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NiceHashClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials
    pub credentials: Credentials,
    /// API host the endpoint paths are appended to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    /// Set the API host (no trailing slash)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
