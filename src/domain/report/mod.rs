//! Report collection domain.
//!
//! Everything needed to walk a requester through one shift report: the
//! step machine, inbound events, the form under assembly, candidate
//! catalogs, pagination, prompt descriptions, and the finished record.

mod catalog;
mod engine;
mod event;
mod form;
mod numeric;
mod paginator;
mod prompt;
mod record;
mod shift;
mod step;

pub use catalog::Catalog;
pub use engine::{
    Completion, ConversationEngine, EngineConfig, EngineContext, Outcome, Requester,
};
pub use event::Event;
pub use form::{Conversation, FormState, Identity};
pub use numeric::parse_signed_integer;
pub use paginator::{paginate, Page};
pub use prompt::{committed_summary, Choice, Prompt};
pub use record::ReportRecord;
pub use shift::Shift;
pub use step::ReportStep;
