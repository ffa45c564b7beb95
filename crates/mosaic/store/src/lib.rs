//! # mosaic-store
//!
//! The engine's collaborator boundary: the `ContentStore` supplying
//! calibrated items, scenarios, cutoff norms and archetypes; the versioned
//! per-child `ProfileStore`; and the consent-gated `ContextProvider`.
//!
//! In-memory implementations back tests and single-process deployments.
//! Profile writes go through an optimistic version check so concurrent
//! updates to the same child serialize instead of interleaving.

#![deny(unsafe_code)]

pub mod archetypes;
pub mod memory;
pub mod norms;
pub mod traits;

pub use archetypes::builtin_archetypes;
pub use memory::{MemoryContentStore, MemoryContextProvider, MemoryProfileStore};
pub use norms::builtin_cutoff_table;
pub use traits::{ContentStore, ContextProvider, ProfileStore};
