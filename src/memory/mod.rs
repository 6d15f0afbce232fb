//! Conversation memory.
//!
//! The pipeline depends only on the [`ConversationMemory`] trait: read the
//! recent window, append messages, search, mark important. The crate ships
//! two implementations: a SQLite-backed store for the server binary and an
//! in-memory store for tests.

pub mod in_memory;
pub mod sqlite;

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::EmotionalTone;

pub use in_memory::InMemoryConversationMemory;
pub use sqlite::SqliteConversationMemory;

/// One persisted conversation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: String,
    pub relationship_id: String,
    pub sender_id: String,
    pub content: String,
    pub emotional_tone: Option<EmotionalTone>,
    /// Audit metadata (tone modulation, safety verdicts, fallback flags).
    pub metadata: HashMap<String, Value>,
    pub important: bool,
    pub created_at: DateTime<Utc>,
}

/// A message to append.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub relationship_id: String,
    pub sender_id: String,
    pub content: String,
    pub emotional_tone: Option<EmotionalTone>,
    pub metadata: HashMap<String, Value>,
}

/// The recent-conversation read used by the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Most recent messages, oldest → newest.
    pub recent_messages: Vec<StoredMessage>,
    /// Timestamp of the latest stored message, if any.
    pub last_interaction: Option<DateTime<Utc>>,
    /// Total messages ever stored for this relationship.
    pub total_messages: usize,
}

impl ConversationContext {
    /// Emotion labels of the recent window, oldest → newest, for the mood
    /// model's history input.
    pub fn emotion_history(&self) -> Vec<EmotionalTone> {
        self.recent_messages
            .iter()
            .filter_map(|m| m.emotional_tone)
            .collect()
    }
}

/// Read/append contract the pipeline consumes.
#[async_trait]
pub trait ConversationMemory: Send + Sync + fmt::Debug {
    /// Fetch the recent window and interaction metadata.
    async fn get_context(&self, relationship_id: &str) -> Result<ConversationContext, anyhow::Error>;

    /// Append one message; returns the stored row.
    async fn store_message(&self, message: NewMessage) -> Result<StoredMessage, anyhow::Error>;

    /// Case-insensitive content search within one relationship.
    async fn search(
        &self,
        relationship_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<StoredMessage>, anyhow::Error>;

    /// Flag a message so retention and retrieval favor it.
    async fn mark_important(&self, message_id: &str) -> Result<(), anyhow::Error>;
}
