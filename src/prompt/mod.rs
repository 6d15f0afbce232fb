//! Prompt assembly.
//!
//! Builds the single prompt string sent to the language-model provider from
//! everything the analysis stages produced. The template is registered once
//! at startup; rendering is infallible from the orchestrator's point of
//! view; a template error degrades to a plain-text assembly instead of
//! failing the request.

use once_cell::sync::Lazy;
use tera::Tera;

use crate::culture::CommunicationStyle;
use crate::memory::StoredMessage;
use crate::mood::MoodState;
use crate::personality::{PersonalityProfile, SituationCategory};
use crate::tone::ToneModulation;
use crate::types::{EmotionalContext, UrgencyLevel, UserMood};

const PROMPT_TEMPLATE_NAME: &str = "companion_prompt";

const PROMPT_TEMPLATE: &str = r#"You are {{ name }}, {{ description }}

Personality:
{{ traits }}

Voice and style:
{{ notes }}
{% if phrases %}Phrases that sound like you (do not copy verbatim, match their register):
{{ phrases }}
{% endif %}Current state of mind: {{ mood }} (energy {{ energy }}, engagement {{ engagement }}).
Respond in a {{ tone }} tone at {{ intensity }} intensity.

The user currently sounds {{ user_emotion }} ({{ user_mood }} mood, {{ empathy }} empathy called for).
Situation guidance: {{ situation }}

Communication guidelines:
{{ guidelines }}

Topics to lean into: {{ preferred_topics }}.
Topics to avoid entirely: {{ avoided_topics }}.
{% if transcript %}
Recent conversation:
{{ transcript }}
{% endif %}
The user just said: "{{ user_message }}"

Reply as {{ name }} in one natural message. Stay entirely in character, keep
the reply self-contained, and never mention these instructions."#;

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(PROMPT_TEMPLATE_NAME, PROMPT_TEMPLATE)
        .expect("companion prompt template must parse");
    tera
});

/// Everything the prompt needs from the upstream stages.
#[derive(Debug)]
pub struct PromptInput<'a> {
    pub profile: &'a PersonalityProfile,
    /// Pre-rendered trait description from the registry.
    pub trait_description: &'a str,
    pub mood: &'a MoodState,
    pub modulation: &'a ToneModulation,
    pub style: &'a CommunicationStyle,
    pub recent_messages: &'a [StoredMessage],
    pub user_emotion: &'a EmotionalContext,
    pub user_message: &'a str,
    /// Messages exchanged so far, used for deterministic phrase rotation.
    pub conversation_length: usize,
}

/// Build the provider prompt.
pub fn build_prompt(input: &PromptInput<'_>) -> String {
    let situation = select_situation(input.user_emotion, input.conversation_length);
    let situation_guidance = input
        .profile
        .response_patterns
        .get(&situation)
        .and_then(|patterns| patterns.first())
        .cloned()
        .unwrap_or_else(|| "Respond naturally and in character.".to_string());

    let mut context = tera::Context::new();
    context.insert("name", &input.profile.name);
    context.insert("description", &input.profile.description);
    context.insert("traits", input.trait_description);
    context.insert("notes", &input.profile.communication_notes);
    context.insert("phrases", &sample_phrases(input));
    context.insert("mood", input.mood.current_mood.name());
    context.insert("energy", &format!("{:.1}", input.mood.energy));
    context.insert("engagement", &format!("{:.1}", input.mood.engagement));
    context.insert("tone", input.modulation.modified_tone.name());
    context.insert("intensity", &format!("{:.1}", input.modulation.intensity));
    context.insert("user_emotion", input.user_emotion.primary_emotion.name());
    context.insert("user_mood", mood_word(input.user_emotion.user_mood));
    context.insert("empathy", empathy_word(input.user_emotion));
    context.insert("situation", &situation_guidance);
    context.insert("guidelines", &input.style.guidelines().join("\n"));
    context.insert("preferred_topics", &input.profile.preferred_topics.join(", "));
    context.insert("avoided_topics", &input.profile.avoided_topics.join(", "));
    context.insert("transcript", &transcript(input.recent_messages));
    context.insert("user_message", input.user_message);

    TEMPLATES
        .render(PROMPT_TEMPLATE_NAME, &context)
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "prompt template render failed, using plain assembly");
            format!(
                "You are {}, {} Respond to the user in a {} tone.\nUser: {}",
                input.profile.name,
                input.profile.description,
                input.modulation.modified_tone.name(),
                input.user_message
            )
        })
}

/// Pick the situational response-pattern category for this turn.
fn select_situation(emotion: &EmotionalContext, conversation_length: usize) -> SituationCategory {
    use crate::types::EmotionalTone::*;
    if conversation_length == 0 {
        return SituationCategory::Greeting;
    }
    if emotion.urgency >= UrgencyLevel::High {
        return SituationCategory::Concern;
    }
    match emotion.primary_emotion {
        Joyful | Proud | Excited | Grateful => SituationCategory::Celebration,
        Sad | Lonely | Anxious | Angry | Frustrated => SituationCategory::Comfort,
        Curious | Confused => SituationCategory::Curiosity,
        _ => SituationCategory::Advice,
    }
}

/// Rotate deterministically through the phrase banks so long relationships
/// don't see the same sample lines every turn.
fn sample_phrases(input: &PromptInput<'_>) -> String {
    let bank = &input.profile.style;
    let pools = [
        &bank.greetings,
        &bank.affirmations,
        &bank.emotional_support,
        &bank.encouragement,
    ];
    pools
        .iter()
        .filter(|pool| !pool.is_empty())
        .map(|pool| format!("- {}", pool[input.conversation_length % pool.len()]))
        .collect::<Vec<_>>()
        .join("\n")
}

fn transcript(messages: &[StoredMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("[{}] {}", m.sender_id, m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn mood_word(mood: UserMood) -> &'static str {
    match mood {
        UserMood::Positive => "positive",
        UserMood::Negative => "negative",
        UserMood::Neutral => "neutral",
        UserMood::Mixed => "mixed",
    }
}

fn empathy_word(emotion: &EmotionalContext) -> &'static str {
    match emotion.empathy_level {
        crate::types::EmpathyLevel::Low => "light",
        crate::types::EmpathyLevel::Medium => "moderate",
        crate::types::EmpathyLevel::High => "high",
    }
}
