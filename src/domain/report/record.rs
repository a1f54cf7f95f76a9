//! The persisted report row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp};

use super::form::FormState;
use super::shift::Shift;

/// One completed shift report, ready for single-row append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// When the record was committed (engine clock, not user input).
    pub recorded_at: Timestamp,
    pub report_date: NaiveDate,
    pub shift: Shift,
    pub model: String,
    pub survey: String,
    pub operator: String,
    pub start_value: i64,
    pub finish_value: i64,
    pub diff_value: i64,
}

impl ReportRecord {
    /// Builds a record from a completed form.
    ///
    /// Fails with `IncompleteReport` naming the first missing field; the
    /// engine only calls this from the confirmation step, where all fields
    /// have passed their steps' validation.
    pub fn from_form(form: &FormState, recorded_at: Timestamp) -> Result<Self, DomainError> {
        Ok(Self {
            recorded_at,
            report_date: form
                .report_date
                .ok_or_else(|| DomainError::incomplete_report("report_date"))?,
            shift: form
                .shift
                .ok_or_else(|| DomainError::incomplete_report("shift"))?,
            model: form
                .model
                .clone()
                .ok_or_else(|| DomainError::incomplete_report("model"))?,
            survey: form
                .survey
                .clone()
                .ok_or_else(|| DomainError::incomplete_report("survey"))?,
            operator: form
                .identity
                .as_ref()
                .map(|identity| identity.name().to_string())
                .ok_or_else(|| DomainError::incomplete_report("identity"))?,
            start_value: form
                .start_value
                .ok_or_else(|| DomainError::incomplete_report("start_value"))?,
            finish_value: form
                .finish_value
                .ok_or_else(|| DomainError::incomplete_report("finish_value"))?,
            diff_value: form
                .diff_value
                .ok_or_else(|| DomainError::incomplete_report("diff_value"))?,
        })
    }
}
