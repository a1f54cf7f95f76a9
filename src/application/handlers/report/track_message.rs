//! TrackMessageHandler - record a transport message id for later cleanup.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, MessageId};
use crate::ports::{ConversationStore, ConversationStoreError};

/// Command to attach a transport message to a live dialogue.
#[derive(Debug, Clone, Copy)]
pub struct TrackMessageCommand {
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
}

/// Error type for tracking messages.
#[derive(Debug, Clone)]
pub enum TrackMessageError {
    /// No dialogue exists under this id.
    NotFound(ConversationId),
    /// Conversation persistence failed.
    Store(String),
}

impl std::fmt::Display for TrackMessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackMessageError::NotFound(id) => write!(f, "Conversation not found: {}", id),
            TrackMessageError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for TrackMessageError {}

impl From<ConversationStoreError> for TrackMessageError {
    fn from(err: ConversationStoreError) -> Self {
        match err {
            ConversationStoreError::NotFound(id) => TrackMessageError::NotFound(id),
            other => TrackMessageError::Store(other.to_string()),
        }
    }
}

/// Handler for tracking prompt messages the transport has sent.
pub struct TrackMessageHandler {
    store: Arc<dyn ConversationStore>,
}

impl TrackMessageHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: TrackMessageCommand) -> Result<(), TrackMessageError> {
        let mut conversation = self
            .store
            .load(cmd.conversation_id)
            .await?
            .ok_or(TrackMessageError::NotFound(cmd.conversation_id))?;
        conversation.form.track_message(cmd.message_id);
        self.store.save(&conversation).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryConversationStore;
    use crate::domain::report::Conversation;

    #[tokio::test]
    async fn tracked_ids_accumulate_in_order() {
        let store = Arc::new(InMemoryConversationStore::new());
        let id = ConversationId::new();
        store.save(&Conversation::new(id)).await.unwrap();
        let handler = TrackMessageHandler::new(store.clone());

        handler
            .handle(TrackMessageCommand {
                conversation_id: id,
                message_id: MessageId::new(7),
            })
            .await
            .unwrap();
        handler
            .handle(TrackMessageCommand {
                conversation_id: id,
                message_id: MessageId::new(8),
            })
            .await
            .unwrap();

        let saved = store.load(id).await.unwrap().unwrap();
        assert_eq!(
            saved.form.pending_message_ids,
            vec![MessageId::new(7), MessageId::new(8)]
        );
    }

    #[tokio::test]
    async fn tracking_against_a_missing_conversation_fails() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = TrackMessageHandler::new(store);

        let result = handler
            .handle(TrackMessageCommand {
                conversation_id: ConversationId::new(),
                message_id: MessageId::new(1),
            })
            .await;

        assert!(matches!(result, Err(TrackMessageError::NotFound(_))));
    }
}
