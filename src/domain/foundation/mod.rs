//! Foundation layer - shared value objects and error types.
//!
//! These building blocks carry no report-specific behavior; the report
//! domain composes them into the conversation state machine.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConversationId, MessageId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
