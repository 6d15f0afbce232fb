//! confidant HTTP server binary.
//!
//! Starts an axum HTTP server exposing the response synthesis pipeline.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `CONFIDANT_CONFIG` — optional YAML config file
//! - `CONFIDANT_BASE_URL` / `CONFIDANT_MODEL` — provider endpoint and model
//! - `CONFIDANT_DB` — SQLite path for conversation memory (default: in-memory)
//! - `OPENAI_API_KEY` — provider API key
//! - `RUST_LOG` — tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use std::sync::Arc;

use confidant::llm::{LanguageModelProvider, OpenAiCompatProvider};
use confidant::memory::{ConversationMemory, InMemoryConversationMemory, SqliteConversationMemory};
use confidant::orchestrator::ResponseEngine;
use confidant::personality::PersonalityRegistry;
use confidant::relationship::InMemoryRelationshipStore;
use confidant::server::{app_router, AppState};
use confidant::utilities::config::EngineConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,confidant=debug".into()),
        )
        .init();

    let config = match EngineConfig::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            std::process::exit(1);
        }
    };

    let memory: Arc<dyn ConversationMemory> = match &config.memory.database_path {
        Some(path) => match SqliteConversationMemory::open(path, config.memory.context_window) {
            Ok(store) => {
                tracing::info!(path = %path, "conversation memory: sqlite");
                Arc::new(store)
            }
            Err(error) => {
                tracing::error!(%error, path = %path, "cannot open conversation database");
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("conversation memory: in-memory (set CONFIDANT_DB to persist)");
            Arc::new(InMemoryConversationMemory::new(config.memory.context_window))
        }
    };

    let relationships = Arc::new(InMemoryRelationshipStore::new());
    let provider = Arc::new(OpenAiCompatProvider::from_config(&config.provider));
    tracing::info!(
        model = provider.name(),
        base_url = %config.provider.base_url,
        "language-model provider configured"
    );

    let engine = ResponseEngine::new(
        Arc::new(PersonalityRegistry::new()),
        relationships.clone(),
        memory,
        provider,
        config.clone(),
    );

    let state = AppState {
        engine: Arc::new(engine),
        relationships,
    };

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let app = app_router(state);

    tracing::info!("confidant server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health         — liveness probe");
    tracing::info!("  POST /chat/generate  — generate one companion reply");
    tracing::info!("  POST /relationships  — register a relationship");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server failed");
}
