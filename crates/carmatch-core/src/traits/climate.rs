use crate::errors::CarmatchResult;
use crate::models::ClimateInfo;

/// Resolves a postal code into climate and infrastructure flags.
pub trait IClimateLookup: Send + Sync {
    /// `Ok(None)` when the postal code is unknown.
    fn lookup(&self, postal_code: &str) -> CarmatchResult<Option<ClimateInfo>>;
}
