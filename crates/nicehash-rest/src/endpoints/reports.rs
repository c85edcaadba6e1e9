//! Asynchronous report generation and retrieval endpoints
//!
//! Report generation is asynchronous on the service side: create a report,
//! poll the list until its status is `Ready`, then download the CSV.

use nicehash_auth::Credentials;
use reqwest::{Client, Method};
use tracing::instrument;

use crate::error::RestResult;
use crate::request;
use crate::types::{ReportMetadata, ReportRequestSpec};

const CREATE_REPORT_PATH: &str = "/main/api/v2/reports/add";
const REPORTS_LIST_PATH: &str = "/main/api/v2/reports/list";
const DOWNLOAD_REPORT_PATH: &str = "/main/api/v2/reports/download";
const DELETE_REPORT_PATH: &str = "/main/api/v2/reports/delete";

/// Report generation and retrieval endpoints
pub struct ReportEndpoints<'a> {
    http: &'a Client,
    credentials: &'a Credentials,
    base_url: &'a str,
}

impl<'a> ReportEndpoints<'a> {
    pub fn new(http: &'a Client, credentials: &'a Credentials, base_url: &'a str) -> Self {
        Self {
            http,
            credentials,
            base_url,
        }
    }

    /// Request generation of a new report
    ///
    /// Generation happens asynchronously; the report shows up in
    /// [`list_reports`](Self::list_reports) once created. Not guaranteed
    /// idempotent, so callers should not blindly retry.
    #[instrument(skip(self, spec))]
    pub async fn create_report(&self, spec: &ReportRequestSpec) -> RestResult<()> {
        let body = serde_json::to_vec(spec)?;

        let response = request::send_signed(
            self.http,
            self.credentials,
            self.base_url,
            Method::POST,
            CREATE_REPORT_PATH,
            &[],
            Some(body),
        )
        .await?;

        request::discard_body(response)
    }

    /// List report metadata, including generation status
    #[instrument(skip(self))]
    pub async fn list_reports(&self) -> RestResult<Vec<ReportMetadata>> {
        let response = request::send_signed(
            self.http,
            self.credentials,
            self.base_url,
            Method::GET,
            REPORTS_LIST_PATH,
            &[],
            None,
        )
        .await?;

        request::decode_json(response).await
    }

    /// Download a generated report as raw CSV bytes
    #[instrument(skip(self))]
    pub async fn download_report(&self, id: &str) -> RestResult<Vec<u8>> {
        let path = format!("{}/{}", DOWNLOAD_REPORT_PATH, id);

        let response = request::send_signed(
            self.http,
            self.credentials,
            self.base_url,
            Method::GET,
            &path,
            &[],
            None,
        )
        .await?;

        request::read_bytes(response).await
    }

    /// Delete the report with the given id
    #[instrument(skip(self))]
    pub async fn delete_report(&self, id: &str) -> RestResult<()> {
        let path = format!("{}/{}", DELETE_REPORT_PATH, id);

        let response = request::send_signed(
            self.http,
            self.credentials,
            self.base_url,
            Method::DELETE,
            &path,
            &[],
            None,
        )
        .await?;

        request::discard_body(response)
    }
}
