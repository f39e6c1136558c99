//! The built-in flag rows, grouped by the answers they read.

mod body;
mod driving;
mod ratings;
mod terrain;
mod usage;

use crate::table::FlagDefinition;

/// Every built-in flag definition. Order only affects log output.
pub fn standard_definitions() -> Vec<FlagDefinition> {
    let mut defs = Vec::with_capacity(carmatch_core::flags::Flag::ALL.len());
    defs.extend(ratings::definitions());
    defs.extend(terrain::definitions());
    defs.extend(usage::definitions());
    defs.extend(body::definitions());
    defs.extend(driving::definitions());
    defs
}
