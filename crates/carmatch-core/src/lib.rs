//! # carmatch-core
//!
//! Foundation crate for the carmatch recommendation engine.
//! Defines the profile data model, scoring dimensions, flags, errors, config,
//! constants, and the port traits for the collaborators the core talks to.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod dimension;
pub mod errors;
pub mod flags;
pub mod models;
pub mod profile;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CarmatchConfig;
pub use dimension::{Dimension, WeightVector};
pub use errors::{CarmatchError, CarmatchResult};
pub use flags::{Flag, FlagSet, FlagValue, Stance};
pub use models::{ClimateInfo, EconomicsInfo, InferredFilters, PassengerInfo};
pub use profile::{Rating, TriState, UserProfile};
