//! REST API client for NiceHash account balances and reports
//!
//! This crate covers the accounting and reports surface of the NiceHash
//! API: balance lookups, asynchronous report generation, listing, CSV
//! download, and deletion.
//!
//! # Authentication
//!
//! Every endpoint is private. Requests carry a millisecond timestamp, a
//! single-use nonce, and an `X-Auth` header computed by HMAC-SHA256 signing
//! the canonical request facts with the API secret (see [`nicehash_auth`]).
//!
//! # Example
//!
//! ```no_run
//! use nicehash_rest::{Credentials, NiceHashClient, ReportRequestSpec};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NiceHashClient::from_env()?;
//!
//!     let account = client.get_account("BTC", true).await?;
//!     println!("BTC available: {}", account.available);
//!
//!     for report in client.list_reports().await? {
//!         if report.status.is_ready() {
//!             let csv = client.download_report(&report.id).await?;
//!             println!("{}: {} bytes", report.name, csv.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Retries
//!
//! The client never retries; a failed call surfaces immediately. GET
//! operations are safe to retry externally, report creation is not.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

mod request;

// Re-export main types
pub use client::{ClientConfig, NiceHashClient, DEFAULT_API_BASE};
pub use error::{RestError, RestResult};
pub use nicehash_auth::Credentials;

// Re-export wire types
pub use types::{
    Account, AccountExtendedDetail, ReportMetadata, ReportRequestSpec, ReportStatus,
};
