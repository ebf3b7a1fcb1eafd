// errors.rs
use std::fmt;

/// Errors originating from either the ingestion boundary
/// (bad sample payloads, rejected records) or the export writers.
#[derive(Debug)]
pub enum DashboardError {
    DataError(String),
    CsvError(String),
    XlsxError(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::DataError(msg) => write!(f, "Data Error: {msg}"),
            DashboardError::CsvError(msg) => write!(f, "CSV Export Error: {msg}"),
            DashboardError::XlsxError(msg) => write!(f, "XLSX Export Error: {msg}"),
        }
    }
}

impl std::error::Error for DashboardError {}
