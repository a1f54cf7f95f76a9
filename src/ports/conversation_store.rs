//! Conversation store port.
//!
//! Persists per-conversation state between events. Each conversation is
//! owned by exactly one requester dialogue; the store only needs to keep
//! them apart, not coordinate concurrent mutation of a single one, since
//! events for one conversation arrive strictly sequentially.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ConversationId;
use crate::domain::report::Conversation;

/// Errors a conversation store can surface.
#[derive(Debug, Clone, Error)]
pub enum ConversationStoreError {
    #[error("Conversation not found: {0}")]
    NotFound(ConversationId),

    #[error("Conversation storage failed: {0}")]
    Storage(String),
}

/// Port for conversation state persistence.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Loads a conversation, if it exists.
    async fn load(&self, id: ConversationId)
        -> Result<Option<Conversation>, ConversationStoreError>;

    /// Saves (inserts or replaces) a conversation.
    async fn save(&self, conversation: &Conversation) -> Result<(), ConversationStoreError>;

    /// Removes a conversation; removing a missing one is not an error.
    async fn remove(&self, id: ConversationId) -> Result<(), ConversationStoreError>;
}
