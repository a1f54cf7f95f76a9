//! RestartReportHandler - discard a dialogue and begin again.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, MessageId, Timestamp};
use crate::domain::report::{Conversation, ConversationEngine, EngineContext, Prompt, Requester};
use crate::ports::{ChoiceSource, ChoiceSourceError, ConversationStore, ConversationStoreError};

use super::{load_catalog, DialogueSettings};

/// Command to restart a report dialogue from scratch.
#[derive(Debug, Clone)]
pub struct RestartReportCommand {
    pub conversation_id: ConversationId,
    pub requester: Requester,
    /// The message that triggered the restart, tracked for cleanup.
    pub trigger_message_id: Option<MessageId>,
}

/// Result of restarting a dialogue.
#[derive(Debug, Clone)]
pub struct RestartReportResult {
    pub prompt: Prompt,
    /// Transport messages from the abandoned attempt, to be deleted.
    pub purge: Vec<MessageId>,
}

/// Error type for restarting a dialogue.
#[derive(Debug, Clone)]
pub enum RestartReportError {
    /// The candidate list source failed.
    ChoiceSource(String),
    /// Conversation persistence failed.
    Store(String),
}

impl std::fmt::Display for RestartReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestartReportError::ChoiceSource(err) => write!(f, "Choice source error: {}", err),
            RestartReportError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for RestartReportError {}

impl From<ChoiceSourceError> for RestartReportError {
    fn from(err: ChoiceSourceError) -> Self {
        RestartReportError::ChoiceSource(err.to_string())
    }
}

impl From<ConversationStoreError> for RestartReportError {
    fn from(err: ConversationStoreError) -> Self {
        RestartReportError::Store(err.to_string())
    }
}

/// Handler for restarting report dialogues.
pub struct RestartReportHandler {
    store: Arc<dyn ConversationStore>,
    choices: Arc<dyn ChoiceSource>,
    settings: DialogueSettings,
}

impl RestartReportHandler {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        choices: Arc<dyn ChoiceSource>,
        settings: DialogueSettings,
    ) -> Self {
        Self {
            store,
            choices,
            settings,
        }
    }

    /// Replaces any live conversation with a fresh one and collects the
    /// message ids of the abandoned attempt for deletion.
    pub async fn handle(
        &self,
        cmd: RestartReportCommand,
    ) -> Result<RestartReportResult, RestartReportError> {
        let mut purge = match self.store.load(cmd.conversation_id).await? {
            Some(mut stale) => stale.form.take_pending_messages(),
            None => Vec::new(),
        };
        if let Some(id) = cmd.trigger_message_id {
            purge.push(id);
        }

        let mut conversation = Conversation::new(cmd.conversation_id);

        let catalog = load_catalog(self.choices.as_ref()).await?;
        let engine = ConversationEngine::new(catalog, self.settings.engine.clone());
        let now = Timestamp::now();
        let ctx = EngineContext {
            today: now.date_in(self.settings.timezone),
            now,
            requester: cmd.requester,
        };

        let prompt = engine.render(&mut conversation, &ctx);
        self.store.save(&conversation).await?;

        tracing::info!(
            conversation = %cmd.conversation_id,
            purged = purge.len(),
            "report dialogue restarted"
        );
        Ok(RestartReportResult { prompt, purge })
    }
}
