//! AdvanceReportHandler - apply one inbound event to a dialogue.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, DomainError, MessageId, Timestamp};
use crate::domain::report::{
    ConversationEngine, EngineContext, Event, Outcome, Prompt, Requester,
};
use crate::ports::{
    ChoiceSource, ChoiceSourceError, ConversationStore, ConversationStoreError, ReportSink,
    ReportSinkError,
};

use super::{load_catalog, DialogueSettings};

/// Command carrying one classified inbound event.
#[derive(Debug, Clone)]
pub struct AdvanceReportCommand {
    pub conversation_id: ConversationId,
    pub event: Event,
    pub requester: Requester,
    /// The inbound message, tracked for cleanup when the event arrived as
    /// free text rather than a button press.
    pub inbound_message_id: Option<MessageId>,
}

/// Result of applying one event.
#[derive(Debug, Clone)]
pub enum AdvanceReportResult {
    /// The dialogue continues; render this prompt.
    Prompt(Prompt),
    /// The report was committed; show the summary and delete the listed
    /// transport messages.
    Completed {
        summary: String,
        purge: Vec<MessageId>,
    },
}

/// Error type for advancing a dialogue.
#[derive(Debug, Clone)]
pub enum AdvanceReportError {
    /// No dialogue exists under this id (e.g. a button pressed after the
    /// conversation completed).
    NotFound(ConversationId),
    /// The candidate list source failed.
    ChoiceSource(String),
    /// Conversation persistence failed.
    Store(String),
    /// The report store rejected the append; the dialogue stays at the
    /// confirmation step so the user can confirm again.
    ReportSinkFailed(String),
    /// Domain invariant violation.
    Domain(DomainError),
}

impl std::fmt::Display for AdvanceReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvanceReportError::NotFound(id) => {
                write!(f, "Conversation not found: {}", id)
            }
            AdvanceReportError::ChoiceSource(err) => write!(f, "Choice source error: {}", err),
            AdvanceReportError::Store(err) => write!(f, "Store error: {}", err),
            AdvanceReportError::ReportSinkFailed(err) => {
                write!(f, "Report sink failed: {}", err)
            }
            AdvanceReportError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AdvanceReportError {}

impl From<ChoiceSourceError> for AdvanceReportError {
    fn from(err: ChoiceSourceError) -> Self {
        AdvanceReportError::ChoiceSource(err.to_string())
    }
}

impl From<ConversationStoreError> for AdvanceReportError {
    fn from(err: ConversationStoreError) -> Self {
        match err {
            ConversationStoreError::NotFound(id) => AdvanceReportError::NotFound(id),
            other => AdvanceReportError::Store(other.to_string()),
        }
    }
}

impl From<ReportSinkError> for AdvanceReportError {
    fn from(err: ReportSinkError) -> Self {
        AdvanceReportError::ReportSinkFailed(err.to_string())
    }
}

impl From<DomainError> for AdvanceReportError {
    fn from(err: DomainError) -> Self {
        AdvanceReportError::Domain(err)
    }
}

/// Handler for advancing report dialogues.
pub struct AdvanceReportHandler {
    store: Arc<dyn ConversationStore>,
    choices: Arc<dyn ChoiceSource>,
    sink: Arc<dyn ReportSink>,
    settings: DialogueSettings,
}

impl AdvanceReportHandler {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        choices: Arc<dyn ChoiceSource>,
        sink: Arc<dyn ReportSink>,
        settings: DialogueSettings,
    ) -> Self {
        Self {
            store,
            choices,
            sink,
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: AdvanceReportCommand,
    ) -> Result<AdvanceReportResult, AdvanceReportError> {
        // 1. Load the conversation; events for a missing one are stale.
        let mut conversation = self
            .store
            .load(cmd.conversation_id)
            .await?
            .ok_or(AdvanceReportError::NotFound(cmd.conversation_id))?;

        // 2. Track the inbound message for later cleanup.
        if let Some(id) = cmd.inbound_message_id {
            conversation.form.track_message(id);
        }

        // 3. Run the state machine over a fresh catalog snapshot.
        let catalog = load_catalog(self.choices.as_ref()).await?;
        let engine = ConversationEngine::new(catalog, self.settings.engine.clone());
        let now = Timestamp::now();
        let ctx = EngineContext {
            today: now.date_in(self.settings.timezone),
            now,
            requester: cmd.requester,
        };

        match engine.handle(&mut conversation, cmd.event, &ctx)? {
            Outcome::Continue(prompt) => {
                self.store.save(&conversation).await?;
                tracing::debug!(
                    conversation = %cmd.conversation_id,
                    step = ?conversation.step,
                    "dialogue advanced"
                );
                Ok(AdvanceReportResult::Prompt(prompt))
            }
            Outcome::Finished(done) => {
                // Append before touching stored state: if the sink fails,
                // the persisted conversation is still at the confirmation
                // step and the user can confirm again.
                if let Err(err) = self.sink.append(&done.record).await {
                    tracing::warn!(
                        conversation = %cmd.conversation_id,
                        error = %err,
                        "report append failed"
                    );
                    return Err(err.into());
                }
                self.store.remove(cmd.conversation_id).await?;
                tracing::info!(
                    conversation = %cmd.conversation_id,
                    model = %done.record.model,
                    "report committed"
                );
                Ok(AdvanceReportResult::Completed {
                    summary: done.summary,
                    purge: done.purge,
                })
            }
        }
    }
}
