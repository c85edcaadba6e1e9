//! API endpoint implementations

pub mod accounting;
pub mod reports;

pub use accounting::AccountingEndpoints;
pub use reports::ReportEndpoints;
