//! # mosaic-behavioral
//!
//! Reduces behavioral scenario sessions into the persistent emotional
//! profile: reaction-time-weighted dimension deltas, an engagement score
//! per session, exponentially-weighted running dimension aggregates, and
//! the derived instinct and consistency indices.
//!
//! Only finalized sessions contribute; a session abandoned before its
//! terminal segment never increments `sessions_completed` or moves a
//! dimension score.

#![deny(unsafe_code)]

pub mod aggregator;
pub mod config;
pub mod engagement;
pub mod weighting;

pub use aggregator::{abandon_session, apply_session, finalize_session, session_dimension_totals};
pub use config::BehavioralConfig;
pub use engagement::engagement_score;
pub use weighting::{reaction_weight, weight_deltas};
