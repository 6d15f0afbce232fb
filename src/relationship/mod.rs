//! Relationship/role lookup.
//!
//! The wider CRUD surface that manages relationships lives outside this
//! crate; the pipeline only needs the read contract in [`RelationshipStore`].
//! A `DashMap`-backed store serves the server binary and tests.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::culture::UserPreferences;
use crate::types::RoleArchetype;
use crate::utilities::errors::EngineError;

/// The relationship metadata the pipeline consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub user_id: String,
    pub archetype: RoleArchetype,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// Read contract for relationship/role data.
#[async_trait]
pub trait RelationshipStore: Send + Sync + fmt::Debug {
    /// Fetch one relationship; unknown ids are a hard error.
    async fn get_relationship(&self, id: &str) -> Result<Relationship, EngineError>;
}

/// Concurrent in-memory relationship store.
#[derive(Debug, Default)]
pub struct InMemoryRelationshipStore {
    relationships: DashMap<String, Relationship>,
}

impl InMemoryRelationshipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a relationship.
    pub fn insert(&self, relationship: Relationship) {
        self.relationships
            .insert(relationship.id.clone(), relationship);
    }
}

#[async_trait]
impl RelationshipStore for InMemoryRelationshipStore {
    async fn get_relationship(&self, id: &str) -> Result<Relationship, EngineError> {
        self.relationships
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| EngineError::RelationshipNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relationship(id: &str, archetype: RoleArchetype) -> Relationship {
        Relationship {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            archetype,
            created_at: Utc::now(),
            preferences: UserPreferences::default(),
        }
    }

    #[tokio::test]
    async fn test_lookup_roundtrip() {
        let store = InMemoryRelationshipStore::new();
        store.insert(relationship("rel-1", RoleArchetype::Friend));
        let found = store.get_relationship("rel-1").await.unwrap();
        assert_eq!(found.archetype, RoleArchetype::Friend);
    }

    #[tokio::test]
    async fn test_unknown_relationship_is_not_found() {
        let store = InMemoryRelationshipStore::new();
        let err = store.get_relationship("missing").await.unwrap_err();
        assert!(matches!(err, EngineError::RelationshipNotFound { .. }));
    }
}
