//! Core traits for the filter chain.
//!
//! This module defines the FilterStage trait and the StageOutcome that
//! decides whether the chain keeps going.

use crate::error::Result;
use crate::query::QueryParams;
use data_loader::{Dataset, MovieRecord};

/// What a stage did with the request.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutcome<'a> {
    /// The stage recognised its parameter and produced the response.
    /// The list may be empty; that is still a match.
    Matched(Vec<&'a MovieRecord>),
    /// The stage's parameter was absent; try the next stage.
    Deferred,
}

impl StageOutcome<'_> {
    pub fn is_matched(&self) -> bool {
        matches!(self, StageOutcome::Matched(_))
    }
}

/// One unit of the filter chain, evaluating a single query parameter.
///
/// ## Design Note
/// - `Send + Sync` so one chain can be shared by every request handler
/// - Stages borrow the dataset and return references into it; they never
///   copy or mutate records
pub trait FilterStage: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// The query parameter this stage reads.
    fn param(&self) -> &str;

    /// Inspect `params` and either produce a filtered view of `dataset` or defer.
    ///
    /// # Returns
    /// * `Ok(StageOutcome::Matched(_))` - The chain stops with this result
    /// * `Ok(StageOutcome::Deferred)` - The chain moves on to the next stage
    /// * `Err` - The parameter was present but unusable; the chain stops
    fn apply<'a>(&self, params: &QueryParams, dataset: &'a Dataset) -> Result<StageOutcome<'a>>;
}
