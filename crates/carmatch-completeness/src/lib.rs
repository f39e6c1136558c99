//! # carmatch-completeness
//!
//! Decides whether each interview section has every answer it needs.
//! Completeness is recomputed from scratch on every turn: one extraction call
//! may fill several fields out of order, so nothing is tracked incrementally.

mod answered;
pub mod economics;
pub mod passengers;
pub mod profile;

pub use economics::{first_missing_economics_field, is_economics_complete, EconomicsField};
pub use passengers::{first_missing_passenger_field, is_passenger_info_complete, PassengerField};
pub use profile::{first_missing_profile_field, is_profile_complete, ProfileField};
