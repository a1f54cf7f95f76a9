//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChoiceSource` - raw candidate lists (models, surveys, operators)
//! - `ReportSink` - single-row append of a finished report
//! - `ConversationStore` - per-conversation state persistence
//!
//! The chat transport is deliberately not a port: the core emits prompt
//! descriptions and message-purge lists as plain data, and the embedding
//! transport decides how to render and delete.

mod choice_source;
mod conversation_store;
mod report_sink;

pub use choice_source::{ChoiceSource, ChoiceSourceError};
pub use conversation_store::{ConversationStore, ConversationStoreError};
pub use report_sink::{ReportSink, ReportSinkError};
