//! Behavioral scenarios, sessions and recorded choices.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::{EmotionalDimension, ScenarioType};
use crate::ids::{ChildId, ScenarioId, SessionId};

// ── Scenario Content ───────────────────────────────────────────────────

/// One selectable option within a scenario choice point. Each option
/// carries the per-dimension deltas it contributes when selected.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub id: String,
    /// Per-dimension deltas, roughly in [-10, 10].
    pub dimension_deltas: BTreeMap<EmotionalDimension, f64>,
    /// Branching hint for the presentation layer; `None` ends the story.
    pub next_segment_id: Option<String>,
}

/// One choice point within a scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioChoice {
    pub id: String,
    pub options: Vec<ScenarioOption>,
}

/// An authored behavioral scenario. Immutable reference content.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BehavioralScenario {
    pub id: ScenarioId,
    pub scenario_type: ScenarioType,
    pub title: String,
    pub choices: Vec<ScenarioChoice>,
    pub min_age_months: u32,
    pub max_age_months: u32,
    pub active: bool,
}

// ── Session Records ────────────────────────────────────────────────────

/// Lifecycle of a behavioral session. Only `Completed` sessions contribute
/// to the emotional profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
    Abandoned,
}

/// One recorded choice within a session, with reaction-time-weighted
/// dimension deltas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChoiceRecord {
    pub choice_id: String,
    pub selected_option: String,
    pub reaction_time_ms: u32,
    pub hesitation_count: u32,
    /// Deltas after reaction-time weighting.
    pub weighted_deltas: BTreeMap<EmotionalDimension, f64>,
    /// 1-based position of this choice in the session.
    pub sequence: u32,
}

/// A behavioral scenario play-through for one child.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BehavioralSession {
    pub id: SessionId,
    pub child_id: ChildId,
    pub scenario_id: ScenarioId,
    pub scenario_type: ScenarioType,
    pub status: SessionStatus,
    pub choices: Vec<ChoiceRecord>,
    pub engagement_score: Option<f64>,
    pub total_duration_ms: Option<u64>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl BehavioralSession {
    /// Number of choices recorded so far.
    pub fn choices_made(&self) -> u32 {
        self.choices.len() as u32
    }
}
