//! In-memory conversation store for tests and ephemeral deployments.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::memory::{ConversationContext, ConversationMemory, NewMessage, StoredMessage};

/// Vec-backed store guarded by a mutex. Messages are held in append order.
#[derive(Debug, Default)]
pub struct InMemoryConversationMemory {
    messages: Mutex<Vec<StoredMessage>>,
    context_window: usize,
}

impl InMemoryConversationMemory {
    pub fn new(context_window: usize) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            context_window,
        }
    }
}

#[async_trait]
impl ConversationMemory for InMemoryConversationMemory {
    async fn get_context(&self, relationship_id: &str) -> Result<ConversationContext, anyhow::Error> {
        let messages = self.messages.lock();
        let matching: Vec<&StoredMessage> = messages
            .iter()
            .filter(|m| m.relationship_id == relationship_id)
            .collect();
        let total_messages = matching.len();
        let window_start = total_messages.saturating_sub(self.context_window);
        Ok(ConversationContext {
            recent_messages: matching[window_start..].iter().map(|m| (*m).clone()).collect(),
            last_interaction: matching.last().map(|m| m.created_at),
            total_messages,
        })
    }

    async fn store_message(&self, message: NewMessage) -> Result<StoredMessage, anyhow::Error> {
        let stored = StoredMessage {
            id: Uuid::new_v4().to_string(),
            relationship_id: message.relationship_id,
            sender_id: message.sender_id,
            content: message.content,
            emotional_tone: message.emotional_tone,
            metadata: message.metadata,
            important: false,
            created_at: Utc::now(),
        };
        self.messages.lock().push(stored.clone());
        Ok(stored)
    }

    async fn search(
        &self,
        relationship_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<StoredMessage>, anyhow::Error> {
        let query = query.to_lowercase();
        Ok(self
            .messages
            .lock()
            .iter()
            .filter(|m| {
                m.relationship_id == relationship_id && m.content.to_lowercase().contains(&query)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn mark_important(&self, message_id: &str) -> Result<(), anyhow::Error> {
        let mut messages = self.messages.lock();
        match messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.important = true;
                Ok(())
            }
            None => Err(anyhow::anyhow!("message not found: {message_id}")),
        }
    }
}
