//! In-memory adapters for every port.

mod choice_source;
mod conversation_store;
mod report_sink;

pub use choice_source::InMemoryChoiceSource;
pub use conversation_store::InMemoryConversationStore;
pub use report_sink::RecordingReportSink;
