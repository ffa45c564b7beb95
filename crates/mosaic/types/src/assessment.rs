//! Assessment records: adaptive test sessions and questionnaire scoring
//! output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::{
    CognitiveDomain, Priority, QuestionnaireDomain, ResponseValue, RiskLevel, StoppingReason,
};
use crate::ids::{AssessmentId, ChildId, ItemId};
use crate::item::ItemResponse;

// ── Adaptive Test Records ──────────────────────────────────────────────

/// Lifecycle of an assessment session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    NotStarted,
    InProgress,
    Completed,
    Abandoned,
}

/// One administered item with the response and the estimate trace around it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub item_id: ItemId,
    pub response: ItemResponse,
    pub is_correct: bool,
    pub reaction_time_ms: u32,
    pub theta_before: f64,
    pub theta_after: f64,
    pub se_before: f64,
    pub se_after: f64,
    /// 1-based position of this item in the session.
    pub sequence: u32,
}

/// One adaptive test for a (child, domain) pair.
///
/// Holds the running ability estimate and the ordered response history; the
/// raw score and percentile are filled in on completion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CognitiveAssessment {
    pub id: AssessmentId,
    pub child_id: ChildId,
    pub domain: CognitiveDomain,
    pub age_months: u32,
    pub status: AssessmentStatus,
    /// Current ability estimate (theta).
    pub ability_estimate: f64,
    /// Standard error of the ability estimate.
    pub standard_error: f64,
    pub items_administered: u32,
    pub history: Vec<ResponseRecord>,
    pub stopping_reason: Option<StoppingReason>,
    pub raw_score: Option<f64>,
    pub percentile: Option<f64>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl CognitiveAssessment {
    /// Item ids already administered in this session.
    pub fn administered_items(&self) -> Vec<&ItemId> {
        self.history.iter().map(|r| &r.item_id).collect()
    }
}

// ── Questionnaire Records ──────────────────────────────────────────────

/// One answered questionnaire item.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub item_id: String,
    pub domain: QuestionnaireDomain,
    pub response: ResponseValue,
}

/// Scored result for one questionnaire domain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: QuestionnaireDomain,
    pub raw_score: u32,
    pub max_score: u32,
    pub percentile: f64,
    pub z_score: f64,
    pub risk_level: RiskLevel,
    pub at_risk_cutoff: f64,
    pub monitoring_cutoff: f64,
}

/// What a non-typical domain score suggests doing next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Professional evaluation is warranted.
    Referral,
    /// Reassess after continued observation.
    Monitoring,
}

/// A follow-up suggestion derived from a domain classification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain: QuestionnaireDomain,
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

/// The complete scored questionnaire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionnaireReport {
    pub child_id: ChildId,
    pub age_months: u32,
    pub domain_scores: Vec<DomainScore>,
    pub overall_risk: RiskLevel,
    pub recommendations: Vec<Recommendation>,
    pub scored_at: DateTime<Utc>,
}
