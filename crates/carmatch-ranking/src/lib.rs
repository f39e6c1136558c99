//! # carmatch-ranking
//!
//! Assembles the ranking query (filter predicate, linear scoring expression,
//! flag-gated adjustments) and runs it against a catalog store. Ships an
//! in-memory store and a SQLite-backed store, plus the engine that drives the
//! whole compilation pipeline for one profile.

pub mod catalog;
pub mod engine;
pub mod query;

pub use catalog::{InMemoryCatalog, SqliteCatalog};
pub use engine::{RankingEngine, RankingInputs, RankingOutcome};
pub use query::{build_ranking_query, QueryBuilder};

use carmatch_core::errors::{CarmatchError, CatalogError};

/// Helper to convert a store failure into a `CarmatchError`.
pub(crate) fn to_catalog_err(reason: impl Into<String>) -> CarmatchError {
    CatalogError::QueryFailed {
        reason: reason.into(),
    }
    .into()
}
