//! # mosaic-composite
//!
//! The Mosaic composite engine. Combines the cognitive profile (40%),
//! the emotional profile (60%) and the adversity multiplier into a single
//! true-potential score and percentile, ranks archetypes by trait-vector
//! similarity, and derives a prioritized gap analysis.
//!
//! Every generation produces a new versioned assessment; prior versions
//! are never mutated.

#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod gaps;
pub mod matching;
pub mod traits;

pub use config::CompositeConfig;
pub use engine::MosaicEngine;
pub use gaps::gap_analysis;
pub use matching::{local_viability_score, match_archetypes};
pub use traits::trait_vector;
