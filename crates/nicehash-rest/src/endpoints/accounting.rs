//! Account balance endpoints

use nicehash_auth::Credentials;
use reqwest::{Client, Method};
use tracing::instrument;

use crate::error::RestResult;
use crate::request;
use crate::types::Account;

const ACCOUNT_PATH: &str = "/main/api/v2/accounting/account2";

/// Account balance endpoints
pub struct AccountingEndpoints<'a> {
    http: &'a Client,
    credentials: &'a Credentials,
    base_url: &'a str,
}

impl<'a> AccountingEndpoints<'a> {
    pub fn new(http: &'a Client, credentials: &'a Credentials, base_url: &'a str) -> Self {
        Self {
            http,
            credentials,
            base_url,
        }
    }

    /// Get the balance snapshot for a single currency account
    ///
    /// # Arguments
    /// * `currency` - currency symbol (e.g. "BTC")
    /// * `extended` - include the pending balance breakdown
    #[instrument(skip(self))]
    pub async fn get_account(&self, currency: &str, extended: bool) -> RestResult<Account> {
        let path = format!("{}/{}", ACCOUNT_PATH, currency);
        let query = [("extendedResponse", extended.to_string())];

        let response = request::send_signed(
            self.http,
            self.credentials,
            self.base_url,
            Method::GET,
            &path,
            &query,
            None,
        )
        .await?;

        request::decode_json(response).await
    }
}
