//! # carmatch-filters
//!
//! Backfills hard filters from the profile, passenger and economics answers.
//! Every rule only fills a gap; values already set (for instance by the
//! extraction step) are left alone. The seat count is the one exception and
//! is recomputed whenever passenger information exists.

pub mod compiler;
pub mod economics;
pub mod seats;

pub use compiler::{compile_filters, restrict_to_electric, FilterCompiler};
pub use economics::{apply_economics, recommend_acquisition, AcquisitionAdvice};
pub use seats::apply_passenger_seats;
