//! Persistent per-child profiles: cognitive and emotional.
//!
//! Profiles are the only shared mutable records in the engine. Writes go
//! through the profile store's optimistic version check; the `version`
//! field here is the version the record was loaded at.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::{CognitiveDomain, EmotionalDimension, ScenarioType};
use crate::ids::ChildId;

// ── Cognitive Profile ──────────────────────────────────────────────────

/// Ability estimate for one cognitive domain.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DomainEstimate {
    /// Final theta from the most recent completed test.
    pub score: f64,
    pub percentile: f64,
}

/// Per-child cognitive profile across domains.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CognitiveProfile {
    pub child_id: ChildId,
    pub domains: BTreeMap<CognitiveDomain, DomainEstimate>,
    /// Mean theta across attempted domains.
    pub composite_score: Option<f64>,
    pub composite_percentile: Option<f64>,
    /// Domains in the top tertile of attempted-domain percentiles.
    pub strengths: Vec<CognitiveDomain>,
    /// Domains in the bottom tertile of attempted-domain percentiles.
    pub growth_areas: Vec<CognitiveDomain>,
    pub version: u64,
    pub last_updated_at: DateTime<Utc>,
}

impl CognitiveProfile {
    pub fn new(child_id: ChildId) -> Self {
        Self {
            child_id,
            domains: BTreeMap::new(),
            composite_score: None,
            composite_percentile: None,
            strengths: Vec::new(),
            growth_areas: Vec::new(),
            version: 0,
            last_updated_at: Utc::now(),
        }
    }

    /// Number of domains with a completed test.
    pub fn domains_completed(&self) -> u32 {
        self.domains.len() as u32
    }
}

// ── Running Statistics ─────────────────────────────────────────────────

/// Welford online mean/variance accumulator.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RunningStats {
    pub count: u64,
    pub mean: f64,
    m2: f64,
}

impl RunningStats {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Sample variance; 0 until two observations exist.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

// ── Emotional Profile ──────────────────────────────────────────────────

/// Per-child emotional profile aggregated over behavioral sessions.
///
/// Dimension scores are EWMA running aggregates in [-100, 100];
/// `sessions_completed` only ever increases.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmotionalProfile {
    pub child_id: ChildId,
    pub dimensions: BTreeMap<EmotionalDimension, f64>,
    /// How instinctively (fast, on net-positive choices) the child
    /// responds, in [0, 1].
    pub instinct_index: f64,
    /// Agreement of dimension outcomes across sessions of the same
    /// scenario type, in [0, 1].
    pub consistency_index: f64,
    pub sessions_completed: u32,
    /// Per scenario type, per dimension running statistics over session
    /// totals. Powers the consistency index.
    pub type_stats: BTreeMap<ScenarioType, BTreeMap<EmotionalDimension, RunningStats>>,
    pub version: u64,
    pub last_updated_at: DateTime<Utc>,
}

impl EmotionalProfile {
    pub fn new(child_id: ChildId) -> Self {
        Self {
            child_id,
            dimensions: BTreeMap::new(),
            instinct_index: 0.5,
            consistency_index: 0.5,
            sessions_completed: 0,
            type_stats: BTreeMap::new(),
            version: 0,
            last_updated_at: Utc::now(),
        }
    }

    /// Mean dimension score mapped from [-100, 100] to a [0, 100] scale;
    /// `None` until at least one session has completed.
    pub fn composite_eq_score(&self) -> Option<f64> {
        if self.dimensions.is_empty() {
            return None;
        }
        let mean: f64 =
            self.dimensions.values().sum::<f64>() / self.dimensions.len() as f64;
        Some((mean + 100.0) / 2.0)
    }
}
