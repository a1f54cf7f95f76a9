//! Recording report sink.
//!
//! Collects appended records in memory for verification, with error
//! injection to exercise the sink-failure path.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::report::ReportRecord;
use crate::ports::{ReportSink, ReportSinkError};

/// In-memory implementation of the `ReportSink` port.
#[derive(Debug, Default)]
pub struct RecordingReportSink {
    records: Mutex<Vec<ReportRecord>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingReportSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every appended record.
    pub fn records(&self) -> Vec<ReportRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Returns the number of appended records.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Returns true if nothing was appended.
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }

    /// Makes every subsequent append fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// Clears a previously injected failure.
    pub fn recover(&self) {
        *self.fail_with.lock().unwrap() = None;
    }
}

#[async_trait]
impl ReportSink for RecordingReportSink {
    async fn append(&self, record: &ReportRecord) -> Result<(), ReportSinkError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(ReportSinkError::Unavailable(message));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::report::{FormState, Identity, ReportRecord, Shift};
    use chrono::NaiveDate;

    fn record() -> ReportRecord {
        let form = FormState {
            report_date: NaiveDate::from_ymd_opt(2025, 7, 1),
            shift: Some(Shift::Day),
            model: Some("m".to_string()),
            survey: Some("s".to_string()),
            identity: Some(Identity::Requester("ann".to_string())),
            start_value: Some(1),
            finish_value: Some(2),
            diff_value: Some(1),
            ..FormState::default()
        };
        ReportRecord::from_form(&form, Timestamp::now()).unwrap()
    }

    #[tokio::test]
    async fn records_appended_rows_in_order() {
        let sink = RecordingReportSink::new();
        assert!(sink.is_empty());

        sink.append(&record()).await.unwrap();
        sink.append(&record()).await.unwrap();

        assert_eq!(sink.len(), 2);
    }

    #[tokio::test]
    async fn injected_failure_drops_nothing_silently() {
        let sink = RecordingReportSink::new();
        sink.fail_with("quota exceeded");

        assert!(sink.append(&record()).await.is_err());
        assert!(sink.is_empty());

        sink.recover();
        sink.append(&record()).await.unwrap();
        assert_eq!(sink.len(), 1);
    }
}
