//! Request and response shapes for the service operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use mosaic_types::{
    ArchetypeMatch, AssessmentId, BehavioralScenario, ChildId, CognitiveDomain, ConsentGrants,
    EmotionalDimension, GapEntry, ItemId, ItemResponse, MosaicAssessment,
    QuestionnaireResponse, ScenarioId, SessionId, StoppingReason, TestItem,
};

// ── Adaptive Testing ───────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartAdaptiveTest {
    pub child_id: ChildId,
    pub domain: CognitiveDomain,
    pub age_months: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartAdaptiveTestResponse {
    pub assessment_id: AssessmentId,
    pub first_item: TestItem,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitAdaptiveResponse {
    pub assessment_id: AssessmentId,
    pub item_id: ItemId,
    pub response: ItemResponse,
    pub reaction_time_ms: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitAdaptiveResponseResponse {
    pub is_correct: bool,
    pub new_theta: f64,
    pub new_se: f64,
    pub is_complete: bool,
    pub stopping_reason: Option<StoppingReason>,
    pub next_item: Option<TestItem>,
}

// ── Questionnaire ──────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreQuestionnaire {
    pub child_id: ChildId,
    pub age_months: u32,
    pub responses: Vec<QuestionnaireResponse>,
}

// ── Behavioral Sessions ────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartBehavioralSession {
    pub child_id: ChildId,
    pub scenario_id: ScenarioId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartBehavioralSessionResponse {
    pub session_id: SessionId,
    pub scenario: BehavioralScenario,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitBehavioralChoice {
    pub session_id: SessionId,
    pub choice_id: String,
    pub option_id: String,
    pub reaction_time_ms: u32,
    pub hesitation_count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitBehavioralChoiceResponse {
    pub recorded: bool,
    /// Reaction-time-weighted deltas this choice contributed.
    pub weighted_deltas: BTreeMap<EmotionalDimension, f64>,
    /// Branching hint for the presentation layer; `None` once the session
    /// is complete or the story ends.
    pub next_segment_id: Option<String>,
    pub is_session_complete: bool,
}

// ── Mosaic Generation ──────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateMosaic {
    pub child_id: ChildId,
    /// Whether to read socio-economic context at all.
    pub include_context: bool,
    /// Consent grants supplied by the caller; context categories without
    /// an active grant are never read.
    pub consents: ConsentGrants,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateMosaicResponse {
    pub mosaic_assessment: MosaicAssessment,
    pub archetype_matches: Vec<ArchetypeMatch>,
    pub gap_analysis: Vec<GapEntry>,
}
