//! Conversation state: everything one interview has gathered so far.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use carmatch_core::errors::{CarmatchResult, ExtractionError};
use carmatch_core::models::{ClimateInfo, EconomicsInfo, InferredFilters, PassengerInfo};
use carmatch_core::profile::UserProfile;
use carmatch_core::traits::{
    ExtractionContext, ExtractionSchema, Fragment, IClimateLookup, IProfileExtractor,
};
use carmatch_ranking::{RankingEngine, RankingInputs, RankingOutcome};

use crate::ids::ConversationId;
use crate::postal::resolve_climate;
use crate::stage::Stage;

/// Answers accumulated over one conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: UserProfile,
    pub passengers: PassengerInfo,
    pub climate: ClimateInfo,
    pub economics: EconomicsInfo,
    /// Filters stated by the user. Compilation only fills their gaps.
    pub filters: InferredFilters,
    /// Filters the last ranking ran with.
    pub compiled_filters: Option<InferredFilters>,
    /// Extraction results merged so far.
    pub merges: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_id(ConversationId::new())
    }

    pub fn with_id(id: ConversationId) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
            profile: UserProfile::default(),
            passengers: PassengerInfo::default(),
            climate: ClimateInfo::default(),
            economics: EconomicsInfo::default(),
            filters: InferredFilters::default(),
            compiled_filters: None,
            merges: 0,
        }
    }

    fn touch(&mut self) {
        self.merges += 1;
        self.updated_at = Utc::now();
    }

    /// Merge one fragment. Postal codes are resolved through `climate`.
    pub fn apply_fragment(
        &mut self,
        fragment: Fragment,
        climate: &dyn IClimateLookup,
    ) -> CarmatchResult<()> {
        let schema = fragment.schema();
        match fragment {
            Fragment::Profile(profile) => self.profile.merge(profile),
            Fragment::Passengers(passengers) => self.passengers.merge(passengers),
            Fragment::Economics(economics) => self.economics.merge(economics),
            Fragment::PostalCode(code) => self.climate = resolve_climate(climate, &code)?,
        }
        self.touch();
        debug!(conversation = %self.id, schema = schema.as_str(), "fragment merged");
        Ok(())
    }

    /// Merge an extraction result. A failed extraction changes nothing.
    ///
    /// Returns whether anything was merged.
    pub fn apply_extraction(
        &mut self,
        result: Result<Fragment, ExtractionError>,
        climate: &dyn IClimateLookup,
    ) -> CarmatchResult<bool> {
        match result {
            Ok(fragment) => self.apply_fragment(fragment, climate).map(|()| true),
            Err(e) => {
                warn!(conversation = %self.id, error = %e, "extraction failed, state unchanged");
                Ok(false)
            }
        }
    }

    /// Ask the extractor for `schema` and merge whatever comes back.
    ///
    /// A fragment for a different schema than requested is treated as a
    /// failed extraction.
    pub fn extract(
        &mut self,
        extractor: &dyn IProfileExtractor,
        schema: ExtractionSchema,
        context: &ExtractionContext,
        climate: &dyn IClimateLookup,
    ) -> CarmatchResult<bool> {
        let result = extractor.extract(schema, context).and_then(|fragment| {
            if fragment.schema() == schema {
                Ok(fragment)
            } else {
                Err(ExtractionError::SchemaMismatch {
                    expected: schema.as_str().to_string(),
                    actual: fragment.schema().as_str().to_string(),
                })
            }
        });
        self.apply_extraction(result, climate)
    }

    pub fn stage(&self) -> Stage {
        Stage::evaluate(&self.profile, &self.passengers, &self.climate, &self.economics)
    }

    pub fn ranking_inputs(&self, limit: usize) -> RankingInputs<'_> {
        RankingInputs {
            profile: Some(&self.profile),
            passengers: Some(&self.passengers),
            climate: &self.climate,
            economics: Some(&self.economics),
            filters: Some(&self.filters),
            limit,
        }
    }

    /// Rank with the current answers and remember the compiled filters.
    ///
    /// Ranking is allowed before the interview is complete; missing sections
    /// only weaken the result.
    pub fn recommend(&mut self, engine: &RankingEngine, limit: usize) -> CarmatchResult<RankingOutcome> {
        let stage = self.stage();
        if !stage.is_ready() {
            warn!(conversation = %self.id, ?stage, "ranking an incomplete interview");
        }
        let outcome = engine.rank(&self.ranking_inputs(limit))?;
        self.compiled_filters = Some(outcome.filters.clone());
        self.updated_at = Utc::now();
        Ok(outcome)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
