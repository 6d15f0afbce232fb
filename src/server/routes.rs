//! Axum route handlers for the confidant HTTP server.
//!
//! # Routes
//!
//! - `GET  /health`         — liveness probe
//! - `POST /chat/generate`  — run the response pipeline for one message
//! - `POST /relationships`  — register a relationship (minimal; the full
//!   CRUD surface lives in the surrounding service, not this crate)

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::culture::UserPreferences;
use crate::orchestrator::{EngineResponse, ResponseEngine};
use crate::relationship::{InMemoryRelationshipStore, Relationship};
use crate::types::RoleArchetype;
use crate::utilities::errors::EngineError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ResponseEngine>,
    /// The registration surface writes here; the engine reads the same
    /// store through its `RelationshipStore` handle.
    pub relationships: Arc<InMemoryRelationshipStore>,
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat/generate", post(generate_handler))
        .route("/relationships", post(create_relationship_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health: liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "confidant",
    }))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub relationship_id: String,
    pub user_id: String,
    pub message: String,
}

/// POST /chat/generate: one message in, one reply out.
async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<EngineResponse>, (StatusCode, Json<serde_json::Value>)> {
    state
        .engine
        .generate_response(&request.relationship_id, &request.user_id, &request.message)
        .await
        .map(Json)
        .map_err(|error| {
            let status = match &error {
                EngineError::RelationshipNotFound { .. } | EngineError::ProfileNotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                EngineError::Memory(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(serde_json::json!({ "error": error.to_string() })))
        })
}

#[derive(Debug, Deserialize)]
pub struct CreateRelationshipRequest {
    pub user_id: String,
    pub archetype: RoleArchetype,
    #[serde(default)]
    pub preferences: UserPreferences,
}

#[derive(Debug, Serialize)]
pub struct CreateRelationshipResponse {
    pub relationship: Relationship,
}

/// POST /relationships: register a relationship for this process.
async fn create_relationship_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateRelationshipRequest>,
) -> impl IntoResponse {
    let relationship = Relationship {
        id: Uuid::new_v4().to_string(),
        user_id: request.user_id,
        archetype: request.archetype,
        created_at: Utc::now(),
        preferences: request.preferences,
    };
    state.relationships.insert(relationship.clone());
    (
        StatusCode::CREATED,
        Json(CreateRelationshipResponse { relationship }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ScriptedProvider;
    use crate::memory::InMemoryConversationMemory;
    use crate::personality::PersonalityRegistry;
    use crate::utilities::config::EngineConfig;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_state() -> AppState {
        let relationships = Arc::new(InMemoryRelationshipStore::new());
        let engine = ResponseEngine::new(
            Arc::new(PersonalityRegistry::new()),
            relationships.clone(),
            Arc::new(InMemoryConversationMemory::new(10)),
            Arc::new(ScriptedProvider::new(
                "Hey! That sounds great, tell me more about it.",
            )),
            EngineConfig::default(),
        );
        AppState {
            engine: Arc::new(engine),
            relationships,
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_generate_unknown_relationship_is_404() {
        let app = app_router(test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/chat/generate")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"relationship_id":"missing","user_id":"u1","message":"hi"}"#,
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_register_then_generate() {
        let state = test_state();
        let app = app_router(state.clone());

        let create = Request::builder()
            .method("POST")
            .uri("/relationships")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"user_id":"u1","archetype":"friend"}"#))
            .unwrap();
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let relationship_id = created["relationship"]["id"].as_str().unwrap().to_string();

        let generate = Request::builder()
            .method("POST")
            .uri("/chat/generate")
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{"relationship_id":"{relationship_id}","user_id":"u1","message":"I had a wonderful day!"}}"#
            )))
            .unwrap();
        let response = app.oneshot(generate).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["content"].as_str().unwrap().contains("tell me more"));
        assert_eq!(json["metadata"]["safety_verified"], true);
    }
}
