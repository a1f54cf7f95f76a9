//! StartReportHandler - begin a guided report dialogue.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, MessageId, Timestamp};
use crate::domain::report::{Conversation, ConversationEngine, EngineContext, Prompt, Requester};
use crate::ports::{ChoiceSource, ChoiceSourceError, ConversationStore, ConversationStoreError};

use super::{load_catalog, DialogueSettings};

/// Command to start (or overwrite) a report dialogue.
#[derive(Debug, Clone)]
pub struct StartReportCommand {
    pub conversation_id: ConversationId,
    pub requester: Requester,
    /// The message that triggered the start, tracked for cleanup.
    pub trigger_message_id: Option<MessageId>,
}

/// Result of starting a dialogue.
#[derive(Debug, Clone)]
pub struct StartReportResult {
    pub prompt: Prompt,
}

/// Error type for starting a dialogue.
#[derive(Debug, Clone)]
pub enum StartReportError {
    /// The candidate list source failed.
    ChoiceSource(String),
    /// Conversation persistence failed.
    Store(String),
}

impl std::fmt::Display for StartReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartReportError::ChoiceSource(err) => write!(f, "Choice source error: {}", err),
            StartReportError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for StartReportError {}

impl From<ChoiceSourceError> for StartReportError {
    fn from(err: ChoiceSourceError) -> Self {
        StartReportError::ChoiceSource(err.to_string())
    }
}

impl From<ConversationStoreError> for StartReportError {
    fn from(err: ConversationStoreError) -> Self {
        StartReportError::Store(err.to_string())
    }
}

/// Handler for starting report dialogues.
pub struct StartReportHandler {
    store: Arc<dyn ConversationStore>,
    choices: Arc<dyn ChoiceSource>,
    settings: DialogueSettings,
}

impl StartReportHandler {
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

    /// Creates a fresh conversation and returns the first prompt.
    ///
    /// Any previous conversation under the same id is replaced; starting
    /// over is always allowed.
    pub async fn handle(
        &self,
        cmd: StartReportCommand,
    ) -> Result<StartReportResult, StartReportError> {
        let mut conversation = Conversation::new(cmd.conversation_id);
        if let Some(id) = cmd.trigger_message_id {
            conversation.form.track_message(id);
        }

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

        tracing::info!(conversation = %cmd.conversation_id, "report dialogue started");
        Ok(StartReportResult { prompt })
    }
}
