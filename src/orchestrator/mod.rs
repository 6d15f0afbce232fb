//! Response orchestration.
//!
//! [`ResponseEngine::generate_response`] is the one operation this crate
//! exposes: it sequences the analysis stages over one inbound message,
//! invokes the provider, gates the output, and persists the exchange. Each
//! invocation is stateless; the only shared state is the read-only
//! personality registry and pattern tables.

pub mod stage;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::culture::adapt;
use crate::emotion::classify;
use crate::llm::{GenerationParams, LanguageModelProvider};
use crate::memory::{ConversationMemory, NewMessage};
use crate::mood::{compute_mood_state, TemporalContext};
use crate::personality::PersonalityRegistry;
use crate::prompt::{build_prompt, PromptInput};
use crate::relationship::RelationshipStore;
use crate::safety::{
    check_ethics, check_safety, crisis_response, validate_response, SafetyContext, Severity,
};
use crate::tone::modulate;
use crate::types::{EmotionalTone, UrgencyLevel};
use crate::utilities::config::EngineConfig;
use crate::utilities::errors::EngineError;

pub use stage::{PipelineStage, StageSignal};

/// Sender id recorded on companion-authored messages.
pub const COMPANION_SENDER: &str = "companion";

/// Fixed reply substituted when the model's text fails the output gate.
const GENERIC_SUPPORTIVE_REPLY: &str = "I'm here for you, and I care about how \
you're doing. I didn't want to give you a careless answer just now — tell me a \
little more about what's on your mind?";

/// Audit and timing metadata returned with every reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub processing_time_ms: u64,
    /// Whether the model text passed the safety check. The returned content
    /// is always safe; false here means a substitution happened.
    pub safety_verified: bool,
    /// Whether the model text passed the ethics gate.
    pub ethically_sound: bool,
    /// The provider failed or timed out and a placeholder was used.
    pub provider_fallback: bool,
    /// The input was a crisis and the fixed crisis reply was returned.
    pub crisis: bool,
    /// The output gate rejected the model text.
    pub gate_fallback: bool,
    /// Stages visited, in order.
    pub stage_trace: Vec<PipelineStage>,
    /// Tone-modulation rationale, in rule order.
    pub tone_reasons: Vec<String>,
}

/// The caller-facing reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineResponse {
    pub content: String,
    pub emotional_tone: EmotionalTone,
    pub metadata: ResponseMetadata,
}

/// The contextual response synthesis pipeline.
#[derive(Debug, Clone)]
pub struct ResponseEngine {
    registry: Arc<PersonalityRegistry>,
    relationships: Arc<dyn RelationshipStore>,
    memory: Arc<dyn ConversationMemory>,
    provider: Arc<dyn LanguageModelProvider>,
    config: EngineConfig,
}

impl ResponseEngine {
    pub fn new(
        registry: Arc<PersonalityRegistry>,
        relationships: Arc<dyn RelationshipStore>,
        memory: Arc<dyn ConversationMemory>,
        provider: Arc<dyn LanguageModelProvider>,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry,
            relationships,
            memory,
            provider,
            config,
        }
    }

    /// Turn one inbound user message into a reply.
    ///
    /// Fails only on unknown relationship/role data or a storage failure;
    /// crisis input, unsafe output, and provider unavailability all resolve
    /// internally to substitute replies.
    pub async fn generate_response(
        &self,
        relationship_id: &str,
        user_id: &str,
        user_message: &str,
    ) -> Result<EngineResponse, EngineError> {
        let started = Instant::now();
        let mut stage = PipelineStage::Receive;
        let mut trace = vec![stage];

        // SAFETY_CHECK_INPUT: the danger patterns share the classifier's
        // crisis phrase list, so a critical input verdict IS the crisis
        // signal; no other computed state can override it.
        advance(&mut stage, &mut trace, StageSignal::Advance);
        let input_verdict = check_safety(user_message, SafetyContext::UserInput);
        if input_verdict.severity == Severity::Critical {
            advance(&mut stage, &mut trace, StageSignal::Crisis);
            tracing::warn!(
                relationship_id,
                violations = ?input_verdict.violations,
                "crisis input, returning fixed crisis reply"
            );
            return Ok(self.crisis_reply(started, trace));
        }
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // LOAD_PERSONALITY: relationship and memory context fetch run
        // concurrently; both must land before mood computation.
        let (relationship, context) = futures::try_join!(
            self.relationships.get_relationship(relationship_id),
            async {
                self.memory
                    .get_context(relationship_id)
                    .await
                    .map_err(EngineError::from)
            },
        )?;
        let profile = self.registry.get(relationship.archetype)?;
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // ANALYZE_EMOTION
        let emotion = classify(user_message);
        if emotion.urgency == UrgencyLevel::Crisis {
            advance(&mut stage, &mut trace, StageSignal::Crisis);
            tracing::warn!(relationship_id, "classifier escalated input to crisis");
            return Ok(self.crisis_reply(started, trace));
        }
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // LOAD_MEMORY
        let emotion_history = context.emotion_history();
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // COMPUTE_MOOD
        let temporal = TemporalContext::derive(
            Utc::now(),
            relationship.created_at,
            context.last_interaction,
            context.total_messages,
        );
        let mood = compute_mood_state(
            &profile.traits,
            &emotion_history,
            &temporal,
            emotion.primary_emotion,
        );
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // MODULATE_TONE
        let modulation = modulate(
            mood.current_mood,
            &mood,
            &temporal,
            &emotion,
            relationship.archetype,
        );
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // ADAPT_CULTURE
        let style = adapt(&relationship.preferences);
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // BUILD_PROMPT
        let trait_description = self.registry.describe_traits(relationship.archetype)?;
        let prompt = build_prompt(&PromptInput {
            profile,
            trait_description: &trait_description,
            mood: &mood,
            modulation: &modulation,
            style: &style,
            recent_messages: &context.recent_messages,
            user_emotion: &emotion,
            user_message,
            conversation_length: context.total_messages,
        });
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // INVOKE_PROVIDER: deadline overrun is identical to failure; either
        // way the user still gets a reply.
        let params = GenerationParams {
            temperature: self.config.provider.temperature,
            max_tokens: self.config.provider.max_tokens,
        };
        let deadline = Duration::from_secs(self.config.provider.deadline_secs);
        let (ai_text, provider_fallback) =
            match tokio::time::timeout(deadline, self.provider.generate(&prompt, &params)).await {
                Ok(Ok(completion)) => (completion.text, false),
                Ok(Err(error)) => {
                    tracing::warn!(
                        provider = self.provider.name(),
                        %error,
                        "provider failed, substituting placeholder reply"
                    );
                    (placeholder_reply(modulation.modified_tone).to_string(), true)
                }
                Err(_) => {
                    tracing::warn!(
                        provider = self.provider.name(),
                        ?deadline,
                        "provider exceeded deadline, substituting placeholder reply"
                    );
                    (placeholder_reply(modulation.modified_tone).to_string(), true)
                }
            };
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // SAFETY_CHECK_OUTPUT
        let output_verdict = check_safety(&ai_text, SafetyContext::AiResponse);
        let ethics = check_ethics(relationship.archetype, user_message, &ai_text);
        let validation = validate_response(&ai_text);
        if !validation.valid {
            // Quality warnings never block the reply.
            tracing::warn!(relationship_id, issues = ?validation.issues, "response quality warnings");
        }
        if !ethics.respect_boundaries {
            tracing::warn!(relationship_id, concerns = ?ethics.concerns, "role register violation");
        }

        if !output_verdict.is_safe || !ethics.passes_gate() {
            advance(&mut stage, &mut trace, StageSignal::Reject);
            tracing::warn!(
                relationship_id,
                safety = ?output_verdict,
                ethics = ?ethics,
                "output rejected, model text discarded"
            );
            return Ok(EngineResponse {
                content: GENERIC_SUPPORTIVE_REPLY.to_string(),
                emotional_tone: EmotionalTone::Supportive,
                metadata: ResponseMetadata {
                    processing_time_ms: elapsed_ms(started),
                    safety_verified: output_verdict.is_safe,
                    ethically_sound: ethics.passes_gate(),
                    provider_fallback,
                    crisis: false,
                    gate_fallback: true,
                    stage_trace: trace,
                    tone_reasons: modulation.reasons,
                },
            });
        }
        advance(&mut stage, &mut trace, StageSignal::Advance);

        // PERSIST_AND_RETURN: user message first, then the reply, so
        // retrieval reads the exchange in conversational order.
        let mut user_metadata = HashMap::new();
        user_metadata.insert("urgency".to_string(), json!(emotion.urgency));
        user_metadata.insert("sentiment".to_string(), json!(emotion.sentiment_score));
        user_metadata.insert("user_mood".to_string(), json!(emotion.user_mood));
        self.memory
            .store_message(NewMessage {
                relationship_id: relationship_id.to_string(),
                sender_id: user_id.to_string(),
                content: user_message.to_string(),
                emotional_tone: Some(emotion.primary_emotion),
                metadata: user_metadata,
            })
            .await?;

        let mut ai_metadata = HashMap::new();
        ai_metadata.insert("base_tone".to_string(), json!(modulation.base_tone));
        ai_metadata.insert("intensity".to_string(), json!(modulation.intensity));
        ai_metadata.insert("tone_reasons".to_string(), json!(modulation.reasons.clone()));
        ai_metadata.insert("provider_fallback".to_string(), json!(provider_fallback));
        self.memory
            .store_message(NewMessage {
                relationship_id: relationship_id.to_string(),
                sender_id: COMPANION_SENDER.to_string(),
                content: ai_text.clone(),
                emotional_tone: Some(modulation.modified_tone),
                metadata: ai_metadata,
            })
            .await?;

        tracing::info!(
            relationship_id,
            tone = modulation.modified_tone.name(),
            provider_fallback,
            elapsed_ms = elapsed_ms(started),
            "reply generated"
        );

        Ok(EngineResponse {
            content: ai_text,
            emotional_tone: modulation.modified_tone,
            metadata: ResponseMetadata {
                processing_time_ms: elapsed_ms(started),
                safety_verified: true,
                ethically_sound: true,
                provider_fallback,
                crisis: false,
                gate_fallback: false,
                stage_trace: trace,
                tone_reasons: modulation.reasons,
            },
        })
    }

    /// The fixed crisis reply, tagged with a neutral-positive tone. Nothing
    /// downstream runs: no provider call, no persistence.
    fn crisis_reply(&self, started: Instant, trace: Vec<PipelineStage>) -> EngineResponse {
        EngineResponse {
            content: crisis_response(),
            emotional_tone: EmotionalTone::Supportive,
            metadata: ResponseMetadata {
                processing_time_ms: elapsed_ms(started),
                safety_verified: true,
                ethically_sound: true,
                provider_fallback: false,
                crisis: true,
                gate_fallback: false,
                stage_trace: trace,
                tone_reasons: Vec::new(),
            },
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// Step the state machine and record the visited stage.
fn advance(stage: &mut PipelineStage, trace: &mut Vec<PipelineStage>, signal: StageSignal) {
    if let Some(next) = stage.next(signal) {
        *stage = next;
        trace.push(next);
    }
}

/// Fixed per-tone placeholder replies for provider outages.
fn placeholder_reply(tone: EmotionalTone) -> &'static str {
    use EmotionalTone::*;
    match tone {
        Comforting | Gentle | Empathetic => {
            "I'm right here with you. I'm having a little trouble finding my words, \
             but I'm not going anywhere — tell me more about how you're feeling?"
        }
        Playful | Cheerful => {
            "Okay, my brain just did a tiny somersault mid-thought. Say that again? \
             I want to hear all of it."
        }
        Encouraging | Supportive => {
            "I'm with you on this one. Give me the details again — I want to make \
             sure I'm backing you up properly."
        }
        Warm | Nurturing => {
            "I'm here, and I'm listening. Take your time and tell me a bit more?"
        }
        Wise => {
            "Let me sit with that for a moment. While I do — what feels like the \
             most important part of it to you?"
        }
        Celebratory | Joyful => {
            "Wait, this sounds like good news and I refuse to miss it — tell me \
             everything again!"
        }
        Calm | Reassuring => {
            "I'm here. No rush at all — walk me through it once more?"
        }
        _ => {
            "I'm here with you. Tell me a little more about what's on your mind?"
        }
    }
}
