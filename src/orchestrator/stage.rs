//! Pipeline state machine.
//!
//! The orchestrator's sequential stages are an explicit enum with a pure
//! transition function, so the crisis and fallback short-circuits are
//! checkable in isolation rather than implicit in control flow. The engine
//! walks this machine and records the visited stages in response metadata.

use serde::{Deserialize, Serialize};

/// One pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Receive,
    SafetyCheckInput,
    /// Terminal: fixed crisis reply, provider never invoked.
    CrisisExit,
    LoadPersonality,
    AnalyzeEmotion,
    LoadMemory,
    ComputeMood,
    ModulateTone,
    AdaptCulture,
    BuildPrompt,
    InvokeProvider,
    SafetyCheckOutput,
    /// Terminal: model text discarded, generic supportive reply substituted.
    FallbackExit,
    /// Terminal: both messages persisted, reply returned.
    PersistAndReturn,
}

/// Outcome of executing one stage, as far as routing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageSignal {
    /// Proceed along the main path.
    Advance,
    /// Input was a crisis; short-circuit everything downstream.
    Crisis,
    /// Output failed the safety/ethics gate; substitute and exit.
    Reject,
}

impl PipelineStage {
    /// The transition function. `None` means the stage is terminal.
    ///
    /// Only two stages branch: the input safety check (on crisis) and the
    /// output safety check (on rejection). Every other signal is ignored at
    /// non-branching stages, which keeps the machine total.
    pub fn next(self, signal: StageSignal) -> Option<PipelineStage> {
        use PipelineStage::*;
        match (self, signal) {
            (Receive, _) => Some(SafetyCheckInput),
            (SafetyCheckInput, StageSignal::Crisis) => Some(CrisisExit),
            (SafetyCheckInput, _) => Some(LoadPersonality),
            (CrisisExit, _) => None,
            (LoadPersonality, _) => Some(AnalyzeEmotion),
            (AnalyzeEmotion, StageSignal::Crisis) => Some(CrisisExit),
            (AnalyzeEmotion, _) => Some(LoadMemory),
            (LoadMemory, _) => Some(ComputeMood),
            (ComputeMood, _) => Some(ModulateTone),
            (ModulateTone, _) => Some(AdaptCulture),
            (AdaptCulture, _) => Some(BuildPrompt),
            (BuildPrompt, _) => Some(InvokeProvider),
            (InvokeProvider, _) => Some(SafetyCheckOutput),
            (SafetyCheckOutput, StageSignal::Reject) => Some(FallbackExit),
            (SafetyCheckOutput, _) => Some(PersistAndReturn),
            (FallbackExit, _) => None,
            (PersistAndReturn, _) => None,
        }
    }

    /// Whether this stage ends the pipeline.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PipelineStage::CrisisExit | PipelineStage::FallbackExit | PipelineStage::PersistAndReturn
        )
    }
}
