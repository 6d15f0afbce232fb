//! SQLite-backed conversation store.
//!
//! One bundled-SQLite connection behind a mutex. Calls are short,
//! single-row operations; the lock is held only for the duration of each
//! statement.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::memory::{ConversationContext, ConversationMemory, NewMessage, StoredMessage};
use crate::types::EmotionalTone;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS messages (
    id              TEXT PRIMARY KEY,
    relationship_id TEXT NOT NULL,
    sender_id       TEXT NOT NULL,
    content         TEXT NOT NULL,
    emotional_tone  TEXT,
    metadata        TEXT NOT NULL DEFAULT '{}',
    important       INTEGER NOT NULL DEFAULT 0,
    created_at      TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_messages_relationship
    ON messages (relationship_id, created_at);
";

/// Conversation store over a bundled SQLite database.
#[derive(Debug)]
pub struct SqliteConversationMemory {
    conn: Mutex<Connection>,
    context_window: usize,
}

impl SqliteConversationMemory {
    /// Open (or create) the database at `path` and run migrations.
    pub fn open(path: impl AsRef<Path>, context_window: usize) -> Result<Self, anyhow::Error> {
        Self::from_connection(Connection::open(path)?, context_window)
    }

    /// Fully in-memory database, mostly for tests.
    pub fn open_in_memory(context_window: usize) -> Result<Self, anyhow::Error> {
        Self::from_connection(Connection::open_in_memory()?, context_window)
    }

    fn from_connection(conn: Connection, context_window: usize) -> Result<Self, anyhow::Error> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
            context_window,
        })
    }

    fn row_to_message(row: &Row<'_>) -> rusqlite::Result<StoredMessage> {
        let tone: Option<String> = row.get("emotional_tone")?;
        let metadata: String = row.get("metadata")?;
        let created_at: String = row.get("created_at")?;
        Ok(StoredMessage {
            id: row.get("id")?,
            relationship_id: row.get("relationship_id")?,
            sender_id: row.get("sender_id")?,
            content: row.get("content")?,
            emotional_tone: tone.as_deref().and_then(tone_from_name),
            metadata: serde_json::from_str(&metadata).unwrap_or_default(),
            important: row.get::<_, i64>("important")? != 0,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

/// Tones are stored by their snake_case name; round-trip through serde so
/// the mapping cannot drift from the enum's serialization.
fn tone_from_name(name: &str) -> Option<EmotionalTone> {
    serde_json::from_value(serde_json::Value::String(name.to_string())).ok()
}

fn tone_to_name(tone: EmotionalTone) -> String {
    tone.name().to_string()
}

#[async_trait]
impl ConversationMemory for SqliteConversationMemory {
    async fn get_context(&self, relationship_id: &str) -> Result<ConversationContext, anyhow::Error> {
        let conn = self.conn.lock();

        let total_messages: usize = conn.query_row(
            "SELECT COUNT(*) FROM messages WHERE relationship_id = ?1",
            params![relationship_id],
            |row| row.get::<_, i64>(0),
        )? as usize;

        let mut statement = conn.prepare(
            "SELECT * FROM messages
             WHERE relationship_id = ?1
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?2",
        )?;
        let mut recent: Vec<StoredMessage> = statement
            .query_map(params![relationship_id, self.context_window as i64], Self::row_to_message)?
            .collect::<Result<_, _>>()?;
        recent.reverse();

        Ok(ConversationContext {
            last_interaction: recent.last().map(|m| m.created_at),
            recent_messages: recent,
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
        let metadata = serde_json::to_string(&stored.metadata)?;
        self.conn.lock().execute(
            "INSERT INTO messages
                 (id, relationship_id, sender_id, content, emotional_tone, metadata, important, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7)",
            params![
                stored.id,
                stored.relationship_id,
                stored.sender_id,
                stored.content,
                stored.emotional_tone.map(tone_to_name),
                metadata,
                stored.created_at.to_rfc3339(),
            ],
        )?;
        Ok(stored)
    }

    async fn search(
        &self,
        relationship_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<StoredMessage>, anyhow::Error> {
        let conn = self.conn.lock();
        let mut statement = conn.prepare(
            "SELECT * FROM messages
             WHERE relationship_id = ?1 AND content LIKE ?2 COLLATE NOCASE
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?3",
        )?;
        let pattern = format!("%{}%", query);
        let messages = statement
            .query_map(params![relationship_id, pattern, limit as i64], Self::row_to_message)?
            .collect::<Result<_, _>>()?;
        Ok(messages)
    }

    async fn mark_important(&self, message_id: &str) -> Result<(), anyhow::Error> {
        let updated = self.conn.lock().execute(
            "UPDATE messages SET important = 1 WHERE id = ?1",
            params![message_id],
        )?;
        if updated == 0 {
            return Err(anyhow::anyhow!("message not found: {message_id}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn message(content: &str, tone: Option<EmotionalTone>) -> NewMessage {
        NewMessage {
            relationship_id: "rel-1".to_string(),
            sender_id: "user-1".to_string(),
            content: content.to_string(),
            emotional_tone: tone,
            metadata: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn test_round_trip_with_tone_and_metadata() {
        let store = SqliteConversationMemory::open_in_memory(10).unwrap();
        let mut new = message("hello there", Some(EmotionalTone::Joyful));
        new.metadata
            .insert("provider_fallback".to_string(), serde_json::Value::Bool(false));
        store.store_message(new).await.unwrap();

        let context = store.get_context("rel-1").await.unwrap();
        assert_eq!(context.total_messages, 1);
        let stored = &context.recent_messages[0];
        assert_eq!(stored.content, "hello there");
        assert_eq!(stored.emotional_tone, Some(EmotionalTone::Joyful));
        assert_eq!(
            stored.metadata.get("provider_fallback"),
            Some(&serde_json::Value::Bool(false))
        );
    }

    #[tokio::test]
    async fn test_window_keeps_newest_in_order() {
        let store = SqliteConversationMemory::open_in_memory(3).unwrap();
        for i in 0..5 {
            store
                .store_message(message(&format!("m{i}"), Some(EmotionalTone::Calm)))
                .await
                .unwrap();
        }
        let context = store.get_context("rel-1").await.unwrap();
        assert_eq!(context.total_messages, 5);
        let contents: Vec<&str> = context
            .recent_messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["m2", "m3", "m4"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let store = SqliteConversationMemory::open_in_memory(10).unwrap();
        store
            .store_message(message("My dog Biscuit was a star", None))
            .await
            .unwrap();
        let hits = store.search("rel-1", "BISCUIT", 5).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_mark_important_missing_id_errors() {
        let store = SqliteConversationMemory::open_in_memory(10).unwrap();
        assert!(store.mark_important("nope").await.is_err());
    }

    #[tokio::test]
    async fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.db");
        {
            let store = SqliteConversationMemory::open(&path, 10).unwrap();
            store
                .store_message(message("persisted", Some(EmotionalTone::Grateful)))
                .await
                .unwrap();
        }
        let reopened = SqliteConversationMemory::open(&path, 10).unwrap();
        let context = reopened.get_context("rel-1").await.unwrap();
        assert_eq!(context.total_messages, 1);
        assert_eq!(context.recent_messages[0].content, "persisted");
    }
}
