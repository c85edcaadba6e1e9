//! Types for NiceHash REST API requests and responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Account Types
// ============================================================================

/// Balance snapshot for a single currency account
///
/// Balances are decimal strings exactly as transmitted by the service; no
/// precision is lost to floating point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Whether the account is active
    pub active: bool,
    /// Currency symbol (e.g. "BTC")
    pub currency: String,
    /// Total balance as a decimal string
    pub total_balance: String,
    /// Available balance as a decimal string
    pub available: String,
    /// Pending balance as a decimal string
    pub pending: String,
    /// Pending balance breakdown, present when `extendedResponse` was requested
    #[serde(default)]
    pub pending_details: Option<AccountExtendedDetail>,
    /// Exchange rate to BTC
    pub btc_rate: f64,
}

/// Pending balance breakdown by source
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountExtendedDetail {
    /// Pending deposits
    pub deposit: String,
    /// Pending withdrawals
    pub withdrawal: String,
    /// Pending exchange transactions
    pub exchange: String,
    /// Pending hashpower order payouts
    pub hashpower_orders: String,
    /// Mining income not yet paid out
    pub unpaid_mining: String,
}

// ============================================================================
// Report Types
// ============================================================================

/// Server-side report generation state
///
/// Reports are generated asynchronously; poll [`ReportMetadata::status`]
/// until it is `Ready` before downloading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum ReportStatus {
    /// Report is still being generated
    NotReady,
    /// Report is ready for download
    Ready,
}

impl ReportStatus {
    /// Whether the report can be downloaded
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl TryFrom<u8> for ReportStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotReady),
            1 => Ok(Self::Ready),
            other => Err(format!("unknown report status: {}", other)),
        }
    }
}

/// Metadata for a generated report
#[derive(Debug, Clone, Deserialize)]
pub struct ReportMetadata {
    /// Report id, used for download and delete
    pub id: String,
    /// Generation state
    pub status: ReportStatus,
    /// Report name
    pub name: String,
    /// Creation time
    #[serde(rename = "createdTs", with = "chrono::serde::ts_milliseconds")]
    pub created: DateTime<Utc>,
    /// Last update time
    #[serde(rename = "updatedTs", with = "chrono::serde::ts_milliseconds")]
    pub updated: DateTime<Utc>,
}

/// Parameters for creating a report
///
/// Immutable value object; build one with [`ReportRequestSpec::new`] and
/// submit it via the reports endpoint. `dateFrom`/`dateTo` travel on the
/// wire as milliseconds-since-epoch decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequestSpec {
    /// Transaction type filter ("ALL", "DEPOSIT", "WITHDRAWAL", "EXCHANGE",
    /// "HASHPOWER", "MINING", "OTHER")
    #[serde(rename = "transaction")]
    pub transaction_type: String,
    /// Cryptocurrency symbol (e.g. "BTC", "ETH")
    pub currency: String,
    /// Fiat currency symbol (e.g. "USD", "CAD")
    pub fiat: String,
    /// Time aggregation ("NONE", "DAY", "MONTH", "QUARTER", "YEAR")
    pub aggregation: String,
    /// Timestamp of the earliest record
    #[serde(rename = "dateFrom", with = "ts_millis_string")]
    pub date_from: DateTime<Utc>,
    /// Timestamp of the latest record
    #[serde(rename = "dateTo", with = "ts_millis_string")]
    pub date_to: DateTime<Utc>,
    /// Timezone offset added to record times
    #[serde(rename = "timezoneOffset")]
    pub timezone_offset: String,
    /// Integer timezone code (e.g. "0" for GMT)
    #[serde(rename = "timezoneValue")]
    pub timezone_value: String,
    /// Always true; the service scopes the report to the calling user
    #[serde(default = "default_personal")]
    personal: bool,
}

fn default_personal() -> bool {
    true
}

impl ReportRequestSpec {
    /// Create a report request
    ///
    /// # Arguments
    /// * `transaction_type` - transaction type filter
    /// * `currency` - cryptocurrency symbol
    /// * `fiat` - fiat currency symbol
    /// * `aggregation` - time aggregation
    /// * `date_from` - timestamp of the earliest record
    /// * `date_to` - timestamp of the latest record
    /// * `timezone_value` - integer timezone code (e.g. "0" for GMT)
    /// * `timezone_offset` - constant added to record times
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transaction_type: impl Into<String>,
        currency: impl Into<String>,
        fiat: impl Into<String>,
        aggregation: impl Into<String>,
        date_from: DateTime<Utc>,
        date_to: DateTime<Utc>,
        timezone_value: impl Into<String>,
        timezone_offset: impl Into<String>,
    ) -> Self {
        Self {
            transaction_type: transaction_type.into(),
            currency: currency.into(),
            fiat: fiat.into(),
            aggregation: aggregation.into(),
            date_from,
            date_to,
            timezone_offset: timezone_offset.into(),
            timezone_value: timezone_value.into(),
            personal: true,
        }
    }
}

/// Millisecond timestamps as decimal strings, the report endpoint's wire
/// format for `dateFrom`/`dateTo`.
mod ts_millis_string {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.timestamp_millis().to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let millis: i64 = s.parse().map_err(serde::de::Error::custom)?;
        DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", millis)))
    }
}
