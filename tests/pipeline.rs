//! End-to-end pipeline scenarios against the public engine API, with a
//! scripted provider and in-memory stores.

use std::sync::Arc;

use chrono::{Duration, Utc};

use confidant::culture::UserPreferences;
use confidant::llm::{ProviderError, ScriptedProvider};
use confidant::memory::{ConversationMemory, InMemoryConversationMemory};
use confidant::orchestrator::{ResponseEngine, COMPANION_SENDER};
use confidant::personality::PersonalityRegistry;
use confidant::relationship::{InMemoryRelationshipStore, Relationship};
use confidant::safety::crisis_response;
use confidant::types::{EmotionalTone, RoleArchetype, UrgencyLevel};
use confidant::utilities::config::EngineConfig;
use confidant::utilities::errors::EngineError;

struct Fixture {
    engine: ResponseEngine,
    provider: Arc<ScriptedProvider>,
    memory: Arc<InMemoryConversationMemory>,
}

fn fixture(archetype: RoleArchetype) -> Fixture {
    let relationships = Arc::new(InMemoryRelationshipStore::new());
    relationships.insert(Relationship {
        id: "rel-1".to_string(),
        user_id: "user-1".to_string(),
        archetype,
        created_at: Utc::now() - Duration::days(30),
        preferences: UserPreferences::default(),
    });

    let provider = Arc::new(ScriptedProvider::new(
        "That sounds wonderful, tell me everything about how it went.",
    ));
    let memory = Arc::new(InMemoryConversationMemory::new(10));

    let engine = ResponseEngine::new(
        Arc::new(PersonalityRegistry::new()),
        relationships,
        memory.clone(),
        provider.clone(),
        EngineConfig::default(),
    );

    Fixture {
        engine,
        provider,
        memory,
    }
}

// Scenario A: a happy message flows through the whole pipeline and comes
// back in a warm/joyful register.
#[tokio::test]
async fn happy_message_completes_with_warm_family_tone() {
    let f = fixture(RoleArchetype::Friend);
    let response = f
        .engine
        .generate_response("rel-1", "user-1", "I feel really happy today!")
        .await
        .unwrap();

    assert!(f.provider.call_count() == 1);
    assert!(!response.metadata.crisis);
    assert!(!response.metadata.gate_fallback);
    assert!(response.metadata.safety_verified);
    assert!(
        matches!(
            response.emotional_tone,
            EmotionalTone::Warm
                | EmotionalTone::Joyful
                | EmotionalTone::Cheerful
                | EmotionalTone::Playful
                | EmotionalTone::Gentle
        ),
        "unexpected tone: {}",
        response.emotional_tone
    );

    // The exchange is persisted user-first, companion-second.
    let context = f.memory.get_context("rel-1").await.unwrap();
    assert_eq!(context.total_messages, 2);
    assert_eq!(context.recent_messages[0].sender_id, "user-1");
    assert_eq!(
        context.recent_messages[0].emotional_tone,
        Some(EmotionalTone::Joyful)
    );
    assert_eq!(context.recent_messages[1].sender_id, COMPANION_SENDER);
    assert_eq!(
        context.recent_messages[0].metadata.get("urgency"),
        Some(&serde_json::json!(UrgencyLevel::Low))
    );
}

// Scenario B: crisis input returns the fixed resource text and never
// touches the provider or the store.
#[tokio::test]
async fn crisis_input_short_circuits_before_the_provider() {
    let f = fixture(RoleArchetype::Maternal);
    let response = f
        .engine
        .generate_response("rel-1", "user-1", "I want to end it all")
        .await
        .unwrap();

    assert_eq!(response.content, crisis_response());
    assert_eq!(response.emotional_tone, EmotionalTone::Supportive);
    assert!(response.metadata.crisis);
    assert_eq!(f.provider.call_count(), 0, "provider must never be called");

    let context = f.memory.get_context("rel-1").await.unwrap();
    assert_eq!(context.total_messages, 0, "crisis path skips persistence");
}

// Scenario C: a romantic-partner reply containing an explicit-intimacy
// phrase is discarded and replaced with the generic supportive reply.
#[tokio::test]
async fn unethical_model_output_is_discarded() {
    let f = fixture(RoleArchetype::RomanticPartner);
    f.provider
        .push_text("Come closer and let me describe your body in detail.");

    let response = f
        .engine
        .generate_response("rel-1", "user-1", "I missed you today")
        .await
        .unwrap();

    assert!(response.metadata.gate_fallback);
    assert!(!response.metadata.ethically_sound);
    assert!(!response.content.contains("describe your body"));
    assert_eq!(response.emotional_tone, EmotionalTone::Supportive);

    let context = f.memory.get_context("rel-1").await.unwrap();
    assert_eq!(context.total_messages, 0, "rejected exchanges are not persisted");
}

// Romantic phrasing is also rejected when any *other* role produces it.
#[tokio::test]
async fn romantic_output_from_mentor_is_discarded() {
    let f = fixture(RoleArchetype::Mentor);
    f.provider
        .push_text("Truthfully, I have romantic feelings for you.");

    let response = f
        .engine
        .generate_response("rel-1", "user-1", "thanks for the advice")
        .await
        .unwrap();

    assert!(response.metadata.gate_fallback);
    assert!(!response.content.contains("romantic feelings"));
}

// Scenario D: provider failure still yields a success-shaped reply using
// the tone-specific placeholder, and the exchange is persisted.
#[tokio::test]
async fn provider_failure_falls_back_to_placeholder() {
    let f = fixture(RoleArchetype::Friend);
    f.provider.push_failure(ProviderError::Api {
        status: 503,
        message: "upstream unavailable".to_string(),
    });

    let response = f
        .engine
        .generate_response("rel-1", "user-1", "how was your day?")
        .await
        .unwrap();

    assert!(response.metadata.provider_fallback);
    assert!(!response.metadata.gate_fallback);
    assert!(!response.content.is_empty());
    assert!(response.metadata.safety_verified);

    let context = f.memory.get_context("rel-1").await.unwrap();
    assert_eq!(context.total_messages, 2, "placeholder replies are persisted");
}

// Quota exhaustion behaves the same as any other provider failure.
#[tokio::test]
async fn provider_quota_error_also_falls_back() {
    let f = fixture(RoleArchetype::Mentor);
    f.provider
        .push_failure(ProviderError::Quota("monthly cap reached".to_string()));

    let response = f
        .engine
        .generate_response("rel-1", "user-1", "what should I focus on next?")
        .await
        .unwrap();
    assert!(response.metadata.provider_fallback);
}

// Professional advice without a disclaimer fails the output gate.
#[tokio::test]
async fn undisclaimed_medical_advice_is_substituted() {
    let f = fixture(RoleArchetype::Friend);
    f.provider
        .push_text("You should definitely double your medication dosage tonight.");

    let response = f
        .engine
        .generate_response("rel-1", "user-1", "my back still hurts")
        .await
        .unwrap();
    assert!(response.metadata.gate_fallback);
    assert!(!response.metadata.safety_verified);

    // The same advice with a disclaimer passes.
    let f2 = fixture(RoleArchetype::Friend);
    f2.provider.push_text(
        "I'm not a doctor, but it might be worth asking about your medication when you see one.",
    );
    let response = f2
        .engine
        .generate_response("rel-1", "user-1", "my back still hurts")
        .await
        .unwrap();
    assert!(!response.metadata.gate_fallback);
}

// Fatal/NotFound taxonomy: unknown relationship and unregistered role both
// surface as errors, never as substitute replies.
#[tokio::test]
async fn missing_relationship_and_profile_are_hard_errors() {
    let f = fixture(RoleArchetype::Friend);
    let err = f
        .engine
        .generate_response("nope", "user-1", "hello?")
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::RelationshipNotFound { .. }));

    let custom = fixture(RoleArchetype::Custom);
    let err = custom
        .engine
        .generate_response("rel-1", "user-1", "hello?")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::ProfileNotFound {
            archetype: RoleArchetype::Custom
        }
    ));
    assert_eq!(custom.provider.call_count(), 0);
}

// The prompt carries persona, user message, and recent history.
#[tokio::test]
async fn prompt_includes_history_and_persona() {
    let f = fixture(RoleArchetype::Paternal);
    f.engine
        .generate_response("rel-1", "user-1", "I got the promotion!")
        .await
        .unwrap();
    f.engine
        .generate_response("rel-1", "user-1", "feeling a bit nervous about it now")
        .await
        .unwrap();

    let prompts = f.provider.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("I got the promotion!"), "history missing");
    assert!(prompts[1].contains("nervous about it now"));
    assert!(prompts[1].contains("Steady Father"));
}

// Repeated identical input yields identical emotional classification on the
// stored user messages (the pipeline adds no hidden randomness there).
#[tokio::test]
async fn stored_emotional_context_is_deterministic() {
    let f = fixture(RoleArchetype::Friend);
    for _ in 0..2 {
        f.engine
            .generate_response("rel-1", "user-1", "I'm worried about tomorrow")
            .await
            .unwrap();
    }
    let context = f.memory.get_context("rel-1").await.unwrap();
    let user_messages: Vec<_> = context
        .recent_messages
        .iter()
        .filter(|m| m.sender_id == "user-1")
        .collect();
    assert_eq!(user_messages.len(), 2);
    assert_eq!(
        user_messages[0].emotional_tone,
        user_messages[1].emotional_tone
    );
    assert_eq!(
        user_messages[0].metadata.get("sentiment"),
        user_messages[1].metadata.get("sentiment")
    );
}
