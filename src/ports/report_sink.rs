//! Report sink port.
//!
//! Accepts a finished record for durable storage. The core appends exactly
//! one row per confirmed report and never retries; a failure is surfaced
//! to the caller, which keeps the conversation at the confirmation step.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::report::ReportRecord;

/// Errors a report sink can surface.
#[derive(Debug, Clone, Error)]
pub enum ReportSinkError {
    #[error("Report sink unavailable: {0}")]
    Unavailable(String),
}

/// Port for the durable report store.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Appends one completed report as a single row.
    async fn append(&self, record: &ReportRecord) -> Result<(), ReportSinkError>;
}
