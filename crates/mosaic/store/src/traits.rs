//! Collaborator traits consumed by the service layer.

use async_trait::async_trait;

use mosaic_types::{
    Archetype, AssessmentId, BehavioralScenario, BehavioralSession, ChildId,
    CognitiveAssessment, CognitiveDomain, CognitiveProfile, CutoffTable, EmotionalProfile,
    EngineResult, FamilyContext, ItemId, MosaicAssessment, OpportunityIndex,
    QuestionnaireReport, ScenarioId, SessionId, TestItem,
};

/// Read access to calibrated content: test items, behavioral scenarios,
/// cutoff norms, archetype definitions. All content is immutable and
/// versioned by the store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch a single item; `ContentUnavailable` when unknown.
    async fn item(&self, id: &ItemId) -> EngineResult<TestItem>;

    /// All items for a cognitive domain. Age filtering happens in the
    /// selector so a running session can still resolve its history.
    async fn domain_items(&self, domain: CognitiveDomain) -> EngineResult<Vec<TestItem>>;

    /// Fetch a behavioral scenario; `ContentUnavailable` when unknown.
    async fn scenario(&self, id: &ScenarioId) -> EngineResult<BehavioralScenario>;

    /// The questionnaire cutoff table.
    async fn cutoff_table(&self) -> EngineResult<CutoffTable>;

    /// The archetype catalogue in definition order.
    async fn archetypes(&self) -> EngineResult<Vec<Archetype>>;
}

/// Versioned persistence for per-child records.
///
/// Profile saves carry the version the record was loaded at; a mismatch
/// against the stored version fails with `ConcurrencyConflict` and
/// persists nothing.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn cognitive_profile(&self, child: &ChildId) -> EngineResult<Option<CognitiveProfile>>;

    /// Save with an optimistic version check; returns the new version.
    async fn save_cognitive_profile(&self, profile: &CognitiveProfile) -> EngineResult<u64>;

    async fn emotional_profile(&self, child: &ChildId) -> EngineResult<Option<EmotionalProfile>>;

    /// Save with an optimistic version check; returns the new version.
    async fn save_emotional_profile(&self, profile: &EmotionalProfile) -> EngineResult<u64>;

    async fn assessment(&self, id: &AssessmentId) -> EngineResult<Option<CognitiveAssessment>>;
    async fn save_assessment(&self, assessment: &CognitiveAssessment) -> EngineResult<()>;

    async fn session(&self, id: &SessionId) -> EngineResult<Option<BehavioralSession>>;
    async fn save_session(&self, session: &BehavioralSession) -> EngineResult<()>;

    /// Persist a scored questionnaire.
    async fn save_questionnaire_report(&self, report: &QuestionnaireReport) -> EngineResult<()>;

    /// All questionnaire reports for a child, newest first.
    async fn questionnaire_reports(&self, child: &ChildId)
        -> EngineResult<Vec<QuestionnaireReport>>;

    /// Latest Mosaic assessment for a child, by version.
    async fn latest_mosaic(&self, child: &ChildId) -> EngineResult<Option<MosaicAssessment>>;

    /// Full Mosaic history, newest first.
    async fn mosaic_history(&self, child: &ChildId) -> EngineResult<Vec<MosaicAssessment>>;

    /// Append a new Mosaic version. The version must be exactly one past
    /// the stored maximum; prior versions are never mutated.
    async fn append_mosaic(&self, mosaic: &MosaicAssessment) -> EngineResult<()>;
}

/// Optional socio-economic context source. Callers gate every read
/// behind an explicit consent grant; the engine never calls this without
/// one.
#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Opportunity data for a zip code; implementations fall back to a
    /// flagged national estimate rather than failing.
    async fn opportunity_index(&self, zip_code: &str) -> EngineResult<OpportunityIndex>;

    /// The family context on record for a child, if any.
    async fn family_context(&self, child: &ChildId) -> EngineResult<Option<FamilyContext>>;
}
