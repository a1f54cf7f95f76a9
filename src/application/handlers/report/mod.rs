//! Report dialogue handlers.
//!
//! Each handler wires the ports to the conversation engine for one
//! transport-facing operation: starting a dialogue, advancing it by one
//! event, restarting it, cancelling it, and recording transport message
//! ids for later cleanup.

mod advance_report;
mod cancel_report;
mod restart_report;
mod start_report;
mod track_message;

pub use advance_report::{
    AdvanceReportCommand, AdvanceReportError, AdvanceReportHandler, AdvanceReportResult,
};
pub use cancel_report::{
    CancelReportCommand, CancelReportError, CancelReportHandler, CancelReportResult,
};
pub use restart_report::{
    RestartReportCommand, RestartReportError, RestartReportHandler, RestartReportResult,
};
pub use start_report::{
    StartReportCommand, StartReportError, StartReportHandler, StartReportResult,
};
pub use track_message::{TrackMessageCommand, TrackMessageError, TrackMessageHandler};

use chrono_tz::Tz;

use crate::domain::report::{Catalog, EngineConfig};
use crate::ports::{ChoiceSource, ChoiceSourceError};

/// Shared dialogue parameters handed to every handler.
#[derive(Debug, Clone)]
pub struct DialogueSettings {
    /// Reporting timezone anchoring "today" on the date keyboard and the
    /// committed row timestamp.
    pub timezone: Tz,
    pub engine: EngineConfig,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
            engine: EngineConfig::default(),
        }
    }
}

/// Loads and normalizes the candidate lists for one engine invocation.
///
/// The source is re-read per event so list edits show up mid-conversation.
pub(crate) async fn load_catalog(
    source: &dyn ChoiceSource,
) -> Result<Catalog, ChoiceSourceError> {
    Ok(Catalog::new(
        source.list_models().await?,
        source.list_surveys().await?,
        source.list_operators().await?,
    ))
}
