//! CancelReportHandler - end a dialogue without starting a new one.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, MessageId};
use crate::ports::{ConversationStore, ConversationStoreError};

/// Command to abandon a report dialogue.
#[derive(Debug, Clone, Copy)]
pub struct CancelReportCommand {
    pub conversation_id: ConversationId,
    /// The message that triggered the cancel, tracked for cleanup.
    pub trigger_message_id: Option<MessageId>,
}

/// Result of cancelling a dialogue.
#[derive(Debug, Clone)]
pub struct CancelReportResult {
    /// Transport messages from the abandoned attempt, to be deleted.
    pub purge: Vec<MessageId>,
}

/// Error type for cancelling a dialogue.
#[derive(Debug, Clone)]
pub enum CancelReportError {
    /// Conversation persistence failed.
    Store(String),
}

impl std::fmt::Display for CancelReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CancelReportError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for CancelReportError {}

impl From<ConversationStoreError> for CancelReportError {
    fn from(err: ConversationStoreError) -> Self {
        CancelReportError::Store(err.to_string())
    }
}

/// Handler for cancelling report dialogues.
pub struct CancelReportHandler {
    store: Arc<dyn ConversationStore>,
}

impl CancelReportHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    /// Removes the conversation, if one is live, and collects its message
    /// ids for deletion. Cancelling an already-ended dialogue is not an
    /// error; only the trigger message comes back for cleanup.
    pub async fn handle(
        &self,
        cmd: CancelReportCommand,
    ) -> Result<CancelReportResult, CancelReportError> {
        let mut purge = match self.store.load(cmd.conversation_id).await? {
            Some(mut conversation) => {
                let ids = conversation.form.take_pending_messages();
                self.store.remove(cmd.conversation_id).await?;
                tracing::info!(
                    conversation = %cmd.conversation_id,
                    purged = ids.len(),
                    "report dialogue cancelled"
                );
                ids
            }
            None => Vec::new(),
        };
        if let Some(id) = cmd.trigger_message_id {
            purge.push(id);
        }
        Ok(CancelReportResult { purge })
    }
}
