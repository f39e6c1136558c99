//! Postal-code validation and climate resolution.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use carmatch_core::constants::POSTAL_CODE_LEN;
use carmatch_core::errors::CarmatchResult;
use carmatch_core::models::ClimateInfo;
use carmatch_core::traits::IClimateLookup;

/// Exactly `POSTAL_CODE_LEN` ASCII digits.
static POSTAL_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!("^[0-9]{{{POSTAL_CODE_LEN}}}$")).ok());

pub fn is_valid_postal_code(code: &str) -> bool {
    POSTAL_CODE.as_ref().is_some_and(|re| re.is_match(code))
}

/// Climate flags for `code`.
///
/// Invalid codes never reach the lookup and come back as not-found, as do
/// codes the lookup does not know. Lookup failures propagate.
pub fn resolve_climate(lookup: &dyn IClimateLookup, code: &str) -> CarmatchResult<ClimateInfo> {
    let code = code.trim();
    if !is_valid_postal_code(code) {
        warn!(postal_code = code, "invalid postal code, skipping climate lookup");
        return Ok(ClimateInfo::not_found(code));
    }
    match lookup.lookup(code)? {
        Some(mut info) => {
            info.postal_code_resolved = true;
            info.postal_code = Some(code.to_string());
            debug!(postal_code = code, adverse = info.is_adverse(), "climate resolved");
            Ok(info)
        }
        None => {
            debug!(postal_code = code, "postal code not found");
            Ok(ClimateInfo::not_found(code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_five_digits() {
        assert!(is_valid_postal_code("28001"));
        assert!(is_valid_postal_code("00000"));
        assert!(!is_valid_postal_code("2800"));
        assert!(!is_valid_postal_code("280011"));
        assert!(!is_valid_postal_code("28a01"));
        assert!(!is_valid_postal_code(" 28001"));
        assert!(!is_valid_postal_code("２８００１"));
        assert!(is_valid_postal_code(&"7".repeat(POSTAL_CODE_LEN)));
        assert!(!is_valid_postal_code(&"7".repeat(POSTAL_CODE_LEN + 1)));
    }
}
