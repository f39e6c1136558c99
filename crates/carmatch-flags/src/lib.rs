//! # carmatch-flags
//!
//! Derives the per-profile flag set from profile, climate and passenger
//! answers. Every flag is one row of a declarative table; the interpreter
//! evaluates rows independently, so no flag can observe another.

pub mod deriver;
pub mod inputs;
pub mod rules;
pub mod table;

pub use deriver::{derive_flags, FlagDeriver};
pub use inputs::FlagInputs;
pub use table::{FlagCase, FlagDefinition, FlagTable, Predicate};
