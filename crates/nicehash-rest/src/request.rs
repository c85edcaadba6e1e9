//! Signed request plumbing shared by all endpoint groups
//!
//! Every outbound request carries a fresh timestamp and nonce, the full set
//! of protocol headers, and an `X-Auth` signature bound to the exact method,
//! path, query, and body being sent. The query string is encoded exactly
//! once and the body is buffered, so the signed bytes and the transmitted
//! bytes cannot diverge.

use nicehash_auth::{Credentials, RequestSigner};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{RestError, RestResult};

/// Expected status for every operation in this API.
pub(crate) const OK: &[u16] = &[200];

/// Build, sign, and send a request, returning the raw response
///
/// `path` is relative to `base_url` and is signed as-is; `query` is encoded
/// into a single canonical string used both for signing and for the URL.
pub(crate) async fn send_signed(
    http: &reqwest::Client,
    credentials: &Credentials,
    base_url: &str,
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<Vec<u8>>,
) -> RestResult<Response> {
    let query_string = serde_urlencoded::to_string(query)
        .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

    let url = if query_string.is_empty() {
        format!("{}{}", base_url, path)
    } else {
        format!("{}{}?{}", base_url, path, query_string)
    };

    let body = body.unwrap_or_default();
    let signer = RequestSigner::new(credentials);
    let auth = signer.auth_header(method.as_str(), path, &query_string, &body);

    debug!(method = %method, path, "sending signed request");

    let response = http
        .request(method, url)
        .header("X-Time", signer.time())
        .header("X-Nonce", signer.nonce())
        .header("X-Organization-Id", signer.org_id())
        .header("X-Request-Id", signer.nonce())
        .header("X-Auth", auth)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json, text/csv")
        .body(body)
        .send()
        .await?;

    Ok(response)
}

/// Validate the status and deserialize the JSON body
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> RestResult<T> {
    RestError::check_status(response.status().as_u16(), OK)?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Validate the status and return the body verbatim (CSV downloads)
pub(crate) async fn read_bytes(response: Response) -> RestResult<Vec<u8>> {
    RestError::check_status(response.status().as_u16(), OK)?;
    Ok(response.bytes().await?.to_vec())
}

/// Validate the status and discard the body (write-only operations)
pub(crate) fn discard_body(response: Response) -> RestResult<()> {
    RestError::check_status(response.status().as_u16(), OK)
}
