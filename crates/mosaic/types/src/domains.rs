//! Domain, dimension and classification enums.
//!
//! Trait keys for archetype matching are the `label()` strings of
//! [`CognitiveDomain`] and [`EmotionalDimension`], so the two enums share a
//! single namespace with the archetype weight tables.

use serde::{Deserialize, Serialize};

// ── Cognitive Domains ──────────────────────────────────────────────────

/// Cognitive domains measured by the adaptive test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveDomain {
    Math,
    Logic,
    Verbal,
    Spatial,
    Memory,
}

impl CognitiveDomain {
    /// All domains, in canonical order.
    pub const ALL: [CognitiveDomain; 5] = [
        CognitiveDomain::Math,
        CognitiveDomain::Logic,
        CognitiveDomain::Verbal,
        CognitiveDomain::Spatial,
        CognitiveDomain::Memory,
    ];

    /// Stable label used as a trait key.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Logic => "logic",
            Self::Verbal => "verbal",
            Self::Spatial => "spatial",
            Self::Memory => "memory",
        }
    }
}

impl std::fmt::Display for CognitiveDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Emotional Dimensions ───────────────────────────────────────────────

/// Emotional dimensions aggregated from behavioral scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalDimension {
    Empathy,
    RiskTolerance,
    DelayedGratification,
    Cooperation,
    FailureResilience,
    EmotionalRegulation,
}

impl EmotionalDimension {
    /// All dimensions, in canonical order.
    pub const ALL: [EmotionalDimension; 6] = [
        EmotionalDimension::Empathy,
        EmotionalDimension::RiskTolerance,
        EmotionalDimension::DelayedGratification,
        EmotionalDimension::Cooperation,
        EmotionalDimension::FailureResilience,
        EmotionalDimension::EmotionalRegulation,
    ];

    /// Stable label used as a trait key.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empathy => "empathy",
            Self::RiskTolerance => "risk_tolerance",
            Self::DelayedGratification => "delayed_gratification",
            Self::Cooperation => "cooperation",
            Self::FailureResilience => "failure_resilience",
            Self::EmotionalRegulation => "emotional_regulation",
        }
    }
}

impl std::fmt::Display for EmotionalDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Questionnaire Domains ──────────────────────────────────────────────

/// Developmental domains covered by the fixed-form questionnaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireDomain {
    Communication,
    GrossMotor,
    FineMotor,
    ProblemSolving,
    PersonalSocial,
}

impl QuestionnaireDomain {
    /// All domains, in canonical order.
    pub const ALL: [QuestionnaireDomain; 5] = [
        QuestionnaireDomain::Communication,
        QuestionnaireDomain::GrossMotor,
        QuestionnaireDomain::FineMotor,
        QuestionnaireDomain::ProblemSolving,
        QuestionnaireDomain::PersonalSocial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::GrossMotor => "gross_motor",
            Self::FineMotor => "fine_motor",
            Self::ProblemSolving => "problem_solving",
            Self::PersonalSocial => "personal_social",
        }
    }
}

impl std::fmt::Display for QuestionnaireDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Risk Classification ────────────────────────────────────────────────

/// Developmental risk classification, ordered by severity.
///
/// The derived ordering is the severity ordering: `Typical < Monitoring <
/// AtRisk < Concern`. Overall risk for an assessment is the maximum across
/// its domain classifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Typical,
    Monitoring,
    AtRisk,
    Concern,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Typical => "typical",
            Self::Monitoring => "monitoring",
            Self::AtRisk => "at_risk",
            Self::Concern => "concern",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Questionnaire Response Values ──────────────────────────────────────

/// The three discrete questionnaire answers and their score values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseValue {
    Yes,
    Sometimes,
    NotYet,
}

impl ResponseValue {
    /// Score contribution of this answer.
    pub fn score(&self) -> u32 {
        match self {
            Self::Yes => 10,
            Self::Sometimes => 5,
            Self::NotYet => 0,
        }
    }
}

// ── Adaptive Test Stopping Reasons ─────────────────────────────────────

/// Why an adaptive test stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoppingReason {
    /// Standard error reached the target precision after the minimum
    /// number of items.
    TargetPrecision,
    /// The item budget was exhausted before reaching target precision.
    MaxItems,
    /// No eligible item remained in the pool.
    ItemPoolExhausted,
    /// The caller cancelled the session.
    Cancelled,
}

// ── Behavioral Scenario Types ──────────────────────────────────────────

/// Scenario families used for consistency tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    Sharing,
    DelayedGratification,
    FailureRecovery,
    EmpathyResponse,
    RiskAssessment,
    Cooperation,
}

// ── Archetypes ─────────────────────────────────────────────────────────

/// The archetype catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeType {
    Diplomat,
    SystemsArchitect,
    Operator,
    Caregiver,
    Creator,
    Analyst,
    Builder,
    Explorer,
    Connector,
    Guardian,
}

impl ArchetypeType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Diplomat => "diplomat",
            Self::SystemsArchitect => "systems_architect",
            Self::Operator => "operator",
            Self::Caregiver => "caregiver",
            Self::Creator => "creator",
            Self::Analyst => "analyst",
            Self::Builder => "builder",
            Self::Explorer => "explorer",
            Self::Connector => "connector",
            Self::Guardian => "guardian",
        }
    }
}

impl std::fmt::Display for ArchetypeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Consent ────────────────────────────────────────────────────────────

/// Context data categories that require an explicit consent grant before
/// the engine reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentCategory {
    Socioeconomic,
    Location,
    FamilyContext,
}

/// Lifecycle state of a consent grant. Only `Granted` (and unexpired)
/// permits a read; silence or a pending grant never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentStatus {
    Pending,
    Granted,
    Revoked,
    Expired,
}

// ── Shared Priority Scale ──────────────────────────────────────────────

/// Priority scale shared by gap analysis entries and questionnaire
/// recommendations, ordered ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_severity_ordering() {
        assert!(RiskLevel::Typical < RiskLevel::Monitoring);
        assert!(RiskLevel::Monitoring < RiskLevel::AtRisk);
        assert!(RiskLevel::AtRisk < RiskLevel::Concern);
    }

    #[test]
    fn response_values() {
        assert_eq!(ResponseValue::Yes.score(), 10);
        assert_eq!(ResponseValue::Sometimes.score(), 5);
        assert_eq!(ResponseValue::NotYet.score(), 0);
    }

    #[test]
    fn trait_keys_are_disjoint() {
        for d in CognitiveDomain::ALL {
            for e in EmotionalDimension::ALL {
                assert_ne!(d.label(), e.label());
            }
        }
    }

    #[test]
    fn serde_labels_round_trip() {
        let json = serde_json::to_string(&CognitiveDomain::Math).unwrap();
        assert_eq!(json, "\"math\"");
        let back: CognitiveDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CognitiveDomain::Math);
    }
}
