//! Adapters - implementations of the ports.
//!
//! Only in-memory adapters live in the crate; spreadsheet and transport
//! integrations are thin wrappers owned by the embedding process.

pub mod memory;

pub use memory::{InMemoryChoiceSource, InMemoryConversationStore, RecordingReportSink};
