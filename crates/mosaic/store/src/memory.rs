//! In-memory store implementations.
//!
//! Back tests and single-process deployments. Profile saves enforce the
//! optimistic version check: the caller's record must carry the version
//! currently stored, and the stored version advances by one on every
//! successful write.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::debug;

use mosaic_types::{
    Archetype, AssessmentId, BehavioralScenario, BehavioralSession, ChildId,
    CognitiveAssessment, CognitiveDomain, CognitiveProfile, CutoffTable, EmotionalProfile,
    EngineError, EngineResult, FamilyContext, ItemId, MosaicAssessment, OpportunityIndex,
    QuestionnaireReport, ScenarioId, SessionId, TestItem,
};

use crate::archetypes::builtin_archetypes;
use crate::norms::builtin_cutoff_table;
use crate::traits::{ContentStore, ContextProvider, ProfileStore};

// ── Content Store ──────────────────────────────────────────────────────

/// In-memory content store, seeded with the built-in cutoff norms and
/// archetype catalogue.
pub struct MemoryContentStore {
    items: RwLock<HashMap<ItemId, TestItem>>,
    scenarios: RwLock<HashMap<ScenarioId, BehavioralScenario>>,
    cutoffs: CutoffTable,
    archetypes: Vec<Archetype>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            scenarios: RwLock::new(HashMap::new()),
            cutoffs: builtin_cutoff_table(),
            archetypes: builtin_archetypes(),
        }
    }

    /// Author a test item.
    pub fn insert_item(&self, item: TestItem) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(item.id.clone(), item);
    }

    /// Author a behavioral scenario.
    pub fn insert_scenario(&self, scenario: BehavioralScenario) {
        self.scenarios
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scenario.id.clone(), scenario);
    }

    /// Replace the cutoff table (tests with custom norms).
    pub fn with_cutoff_table(mut self, table: CutoffTable) -> Self {
        self.cutoffs = table;
        self
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn item(&self, id: &ItemId) -> EngineResult<TestItem> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::ContentUnavailable(format!("unknown item {id}")))
    }

    async fn domain_items(&self, domain: CognitiveDomain) -> EngineResult<Vec<TestItem>> {
        Ok(self
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|item| item.domain == domain)
            .cloned()
            .collect())
    }

    async fn scenario(&self, id: &ScenarioId) -> EngineResult<BehavioralScenario> {
        self.scenarios
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::ContentUnavailable(format!("unknown scenario {id}")))
    }

    async fn cutoff_table(&self) -> EngineResult<CutoffTable> {
        Ok(self.cutoffs.clone())
    }

    async fn archetypes(&self) -> EngineResult<Vec<Archetype>> {
        Ok(self.archetypes.clone())
    }
}

// ── Profile Store ──────────────────────────────────────────────────────

/// In-memory versioned profile store.
#[derive(Default)]
pub struct MemoryProfileStore {
    cognitive: RwLock<HashMap<ChildId, CognitiveProfile>>,
    emotional: RwLock<HashMap<ChildId, EmotionalProfile>>,
    assessments: RwLock<HashMap<AssessmentId, CognitiveAssessment>>,
    sessions: RwLock<HashMap<SessionId, BehavioralSession>>,
    reports: RwLock<HashMap<ChildId, Vec<QuestionnaireReport>>>,
    mosaics: RwLock<HashMap<ChildId, Vec<MosaicAssessment>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn cognitive_profile(&self, child: &ChildId) -> EngineResult<Option<CognitiveProfile>> {
        Ok(self
            .cognitive
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(child)
            .cloned())
    }

    async fn save_cognitive_profile(&self, profile: &CognitiveProfile) -> EngineResult<u64> {
        let mut stored = self
            .cognitive
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let current = stored.get(&profile.child_id).map(|p| p.version).unwrap_or(0);
        if profile.version != current {
            return Err(EngineError::ConcurrencyConflict {
                expected: profile.version,
                found: current,
            });
        }

        let mut next = profile.clone();
        next.version = current + 1;
        let version = next.version;
        stored.insert(profile.child_id.clone(), next);
        debug!(child = %profile.child_id, version, "saved cognitive profile");
        Ok(version)
    }

    async fn emotional_profile(&self, child: &ChildId) -> EngineResult<Option<EmotionalProfile>> {
        Ok(self
            .emotional
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(child)
            .cloned())
    }

    async fn save_emotional_profile(&self, profile: &EmotionalProfile) -> EngineResult<u64> {
        let mut stored = self
            .emotional
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let current = stored.get(&profile.child_id).map(|p| p.version).unwrap_or(0);
        if profile.version != current {
            return Err(EngineError::ConcurrencyConflict {
                expected: profile.version,
                found: current,
            });
        }

        let mut next = profile.clone();
        next.version = current + 1;
        let version = next.version;
        stored.insert(profile.child_id.clone(), next);
        debug!(child = %profile.child_id, version, "saved emotional profile");
        Ok(version)
    }

    async fn assessment(&self, id: &AssessmentId) -> EngineResult<Option<CognitiveAssessment>> {
        Ok(self
            .assessments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }

    async fn save_assessment(&self, assessment: &CognitiveAssessment) -> EngineResult<()> {
        self.assessments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(assessment.id.clone(), assessment.clone());
        Ok(())
    }

    async fn session(&self, id: &SessionId) -> EngineResult<Option<BehavioralSession>> {
        Ok(self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }

    async fn save_session(&self, session: &BehavioralSession) -> EngineResult<()> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn save_questionnaire_report(&self, report: &QuestionnaireReport) -> EngineResult<()> {
        self.reports
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(report.child_id.clone())
            .or_default()
            .push(report.clone());
        Ok(())
    }

    async fn questionnaire_reports(
        &self,
        child: &ChildId,
    ) -> EngineResult<Vec<QuestionnaireReport>> {
        let mut reports = self
            .reports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(child)
            .cloned()
            .unwrap_or_default();
        reports.sort_by(|a, b| b.scored_at.cmp(&a.scored_at));
        Ok(reports)
    }

    async fn latest_mosaic(&self, child: &ChildId) -> EngineResult<Option<MosaicAssessment>> {
        Ok(self
            .mosaics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(child)
            .and_then(|history| history.iter().max_by_key(|m| m.version))
            .cloned())
    }

    async fn mosaic_history(&self, child: &ChildId) -> EngineResult<Vec<MosaicAssessment>> {
        let mut history = self
            .mosaics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(child)
            .cloned()
            .unwrap_or_default();
        history.sort_by(|a, b| b.version.cmp(&a.version));
        Ok(history)
    }

    async fn append_mosaic(&self, mosaic: &MosaicAssessment) -> EngineResult<()> {
        let mut stored = self
            .mosaics
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let history = stored.entry(mosaic.child_id.clone()).or_default();

        let current_max = history.iter().map(|m| m.version).max().unwrap_or(0);
        if mosaic.version != current_max + 1 {
            return Err(EngineError::ConcurrencyConflict {
                expected: mosaic.version as u64,
                found: current_max as u64,
            });
        }

        history.push(mosaic.clone());
        debug!(child = %mosaic.child_id, version = mosaic.version, "appended mosaic assessment");
        Ok(())
    }
}

// ── Context Provider ───────────────────────────────────────────────────

/// In-memory context provider with per-zip opportunity data and per-child
/// family contexts. Unknown zip codes fall back to the flagged national
/// estimate.
#[derive(Default)]
pub struct MemoryContextProvider {
    opportunity: RwLock<HashMap<String, OpportunityIndex>>,
    families: RwLock<HashMap<ChildId, FamilyContext>>,
}

impl MemoryContextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_opportunity(&self, index: OpportunityIndex) {
        self.opportunity
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(index.zip_code.clone(), index);
    }

    pub fn insert_family_context(&self, child: ChildId, context: FamilyContext) {
        self.families
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(child, context);
    }
}

#[async_trait]
impl ContextProvider for MemoryContextProvider {
    async fn opportunity_index(&self, zip_code: &str) -> EngineResult<OpportunityIndex> {
        Ok(self
            .opportunity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(zip_code)
            .cloned()
            .unwrap_or_else(|| OpportunityIndex::national_estimate(zip_code)))
    }

    async fn family_context(&self, child: &ChildId) -> EngineResult<Option<FamilyContext>> {
        Ok(self
            .families
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(child)
            .cloned())
    }
}
