//! # mosaic-questionnaire
//!
//! Scores a completed fixed-form developmental questionnaire (30 items,
//! 6 per domain across 5 domains) against age-specific cutoff bands,
//! producing per-domain risk classifications, z-score percentiles, an
//! overall risk level, and follow-up recommendations.
//!
//! Scoring is a pure function: identical responses against the same
//! cutoff table always yield the identical report.

#![deny(unsafe_code)]

pub mod recommend;
pub mod scorer;

pub use recommend::recommendations_for;
pub use scorer::{classify_domain, score_questionnaire, ITEMS_PER_DOMAIN, TOTAL_ITEMS};
