//! # mosaic-adaptive
//!
//! The adaptive cognitive tester. One session per (child, domain):
//! items are selected by maximum Fisher information at the current ability
//! estimate, the estimate is refreshed after every response by a
//! Newton-Raphson MAP step over the full response history, and the session
//! stops at target precision, at the item budget, on pool exhaustion, or
//! on cancellation.
//!
//! All functions here are pure over their inputs; persistence of the
//! assessment record and the profile delta belongs to the caller.

#![deny(unsafe_code)]

pub mod config;
pub mod estimator;
pub mod profile;
pub mod selector;
pub mod tester;

pub use config::AdaptiveConfig;
pub use estimator::estimate_ability;
pub use profile::apply_completed_domain;
pub use selector::select_item;
pub use tester::{AdaptiveTester, StepOutcome};
