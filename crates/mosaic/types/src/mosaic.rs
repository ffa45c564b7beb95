//! Composite assessment output: archetypes, matches, gaps, and the
//! versioned Mosaic record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::{ArchetypeType, Priority};
use crate::ids::{ChildId, MosaicId};

// ── Archetypes ─────────────────────────────────────────────────────────

/// A predefined trait-vector profile. Static reference data; `order` is
/// the definition position used for deterministic tie-breaking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Archetype {
    pub archetype_type: ArchetypeType,
    pub name: String,
    pub description: String,
    /// Weights over cognitive-domain and emotional-dimension trait keys,
    /// each in [-1, 1].
    pub trait_weights: BTreeMap<String, f64>,
    /// Industries where this archetype's pathways are viable.
    pub industry_matches: Vec<String>,
    pub order: u32,
}

/// One archetype's similarity to a child's trait vector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArchetypeMatch {
    pub archetype_type: ArchetypeType,
    /// Similarity scaled to [0, 100].
    pub match_score: f64,
    /// 1-based rank; ranks form a contiguous permutation.
    pub match_rank: u32,
    /// Per-trait contribution (normalized child score x weight x 100).
    pub trait_breakdown: BTreeMap<String, f64>,
    /// Whether this archetype matches an industry present locally.
    pub local_viability: bool,
}

// ── Gap Analysis ───────────────────────────────────────────────────────

/// Rough effort horizon for closing a gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatedEffort {
    Weeks,
    Months,
    LongTerm,
}

/// One trait shortfall relative to the target profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GapEntry {
    /// Trait key (cognitive domain or emotional dimension label).
    pub trait_key: String,
    /// Child's current level on a 0-100 scale.
    pub current_level: f64,
    /// Target level on the same scale.
    pub target_level: f64,
    pub priority: Priority,
    pub estimated_effort: EstimatedEffort,
    pub related_archetype: Option<ArchetypeType>,
}

// ── Mosaic Assessment ──────────────────────────────────────────────────

/// One composite assessment. Immutable once calculated; recalculation
/// writes a new record with an incremented `version`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MosaicAssessment {
    pub id: MosaicId,
    pub child_id: ChildId,
    pub version: u32,
    pub raw_cognitive_score: Option<f64>,
    pub raw_emotional_score: Option<f64>,
    pub raw_combined_score: Option<f64>,
    pub adversity_multiplier: f64,
    pub true_potential_score: Option<f64>,
    pub true_potential_percentile: Option<f64>,
    /// Confidence in [0, 1], a function of completed cognitive domains
    /// and behavioral sessions.
    pub confidence_level: f64,
    pub primary_archetype: Option<ArchetypeType>,
    pub secondary_archetype: Option<ArchetypeType>,
    pub local_viability_score: Option<f64>,
    pub archetype_matches: Vec<ArchetypeMatch>,
    pub gap_analysis: Vec<GapEntry>,
    pub calculated_at: DateTime<Utc>,
}
