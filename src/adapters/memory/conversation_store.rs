//! In-memory conversation store.
//!
//! Thread-safe via internal `Mutex`. Suitable for single-process
//! deployments and tests; does not persist across restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::ConversationId;
use crate::domain::report::Conversation;
use crate::ports::{ConversationStore, ConversationStoreError};

/// In-memory implementation of the `ConversationStore` port.
#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    conversations: Mutex<HashMap<ConversationId, Conversation>>,
}

impl InMemoryConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live conversations.
    pub fn len(&self) -> usize {
        self.conversations.lock().unwrap().len()
    }

    /// Returns true if no conversations are live.
    pub fn is_empty(&self) -> bool {
        self.conversations.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn load(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, ConversationStoreError> {
        Ok(self.conversations.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, conversation: &Conversation) -> Result<(), ConversationStoreError> {
        self.conversations
            .lock()
            .unwrap()
            .insert(conversation.id, conversation.clone());
        Ok(())
    }

    async fn remove(&self, id: ConversationId) -> Result<(), ConversationStoreError> {
        self.conversations.lock().unwrap().remove(&id);
        Ok(())
    }
}
