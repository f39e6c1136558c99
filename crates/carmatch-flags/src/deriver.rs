//! Entry point: profile + climate + passengers → flag set.

use carmatch_core::config::FlagsConfig;
use carmatch_core::flags::FlagSet;
use carmatch_core::models::{ClimateInfo, PassengerInfo};
use carmatch_core::profile::UserProfile;
use tracing::{debug, warn};

use crate::inputs::FlagInputs;
use crate::table::FlagTable;

/// Derives flags with a fixed rule table and thresholds.
#[derive(Debug, Clone)]
pub struct FlagDeriver {
    table: FlagTable,
    config: FlagsConfig,
}

impl FlagDeriver {
    pub fn new(config: FlagsConfig) -> Self {
        Self::with_table(FlagTable::standard(), config)
    }

    pub fn with_table(table: FlagTable, config: FlagsConfig) -> Self {
        Self { table, config }
    }

    /// Compute every flag.
    ///
    /// A missing profile yields the full set at defaults so ranking can still
    /// run in a degraded state.
    pub fn derive(
        &self,
        profile: Option<&UserProfile>,
        climate: &ClimateInfo,
        passengers: &PassengerInfo,
    ) -> FlagSet {
        let Some(profile) = profile else {
            warn!("no profile available, returning default flags");
            return FlagSet::defaults();
        };

        let inputs = FlagInputs::new(profile, climate, passengers, &self.config);
        let flags = self.table.evaluate(&inputs);
        debug!(
            active = flags.active().len(),
            rules = self.table.len(),
            "flags derived"
        );
        flags
    }
}

impl Default for FlagDeriver {
    fn default() -> Self {
        Self::new(FlagsConfig::default())
    }
}

/// Derive flags with the built-in table and default thresholds.
pub fn derive_flags(
    profile: Option<&UserProfile>,
    climate: &ClimateInfo,
    passengers: &PassengerInfo,
) -> FlagSet {
    FlagDeriver::default().derive(profile, climate, passengers)
}
