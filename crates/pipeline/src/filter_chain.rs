//! The FilterChain runs filter stages in priority order.
//!
//! Unlike a pipeline where every filter narrows the previous result, the
//! chain is short-circuiting: the first stage that matches owns the
//! response and later stages never run.

use crate::error::Result;
use crate::filters::{AvgVoteFilter, CountryFilter, GenreFilter};
use crate::query::QueryParams;
use crate::traits::{FilterStage, StageOutcome};
use data_loader::{Dataset, MovieRecord};

/// Ordered list of stages plus the fallback.
///
/// ## Usage
/// ```ignore
/// let chain = FilterChain::new()
///     .add_stage(GenreFilter)
///     .add_stage(CountryFilter)
///     .add_stage(AvgVoteFilter);
///
/// let movies = chain.run(&params, &dataset)?;
/// ```
pub struct FilterChain {
    stages: Vec<Box<dyn FilterStage>>,
}

impl FilterChain {
    /// Create a chain with no stages. Every request falls through to the fallback.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The chain served by the API: genre, then country, then avg_vote.
    pub fn standard() -> Self {
        Self::new()
            .add_stage(GenreFilter)
            .add_stage(CountryFilter)
            .add_stage(AvgVoteFilter)
    }

    /// Append a stage (builder pattern). Stages run in insertion order.
    pub fn add_stage(mut self, stage: impl FilterStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Names of the stages, in the order they run.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Resolve a request to one view of the dataset.
    ///
    /// ## Algorithm
    /// 1. For each stage in order:
    ///    a. `Deferred` → continue
    ///    b. `Matched` → return its records
    ///    c. `Err` → return the error, skipping the remaining stages
    /// 2. If every stage deferred, return the whole dataset
    pub fn run<'a>(&self, params: &QueryParams, dataset: &'a Dataset) -> Result<Vec<&'a MovieRecord>> {
        for stage in &self.stages {
            match stage.apply(params, dataset)? {
                StageOutcome::Matched(movies) => {
                    tracing::debug!(
                        "Stage matched: {} (param: {}, output count: {})",
                        stage.name(),
                        stage.param(),
                        movies.len()
                    );
                    return Ok(movies);
                }
                StageOutcome::Deferred => {
                    tracing::trace!("Stage deferred: {}", stage.name());
                }
            }
        }

        tracing::debug!("No stage matched; returning full dataset");
        Ok(fallback(dataset))
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::standard()
    }
}

/// Response used when no stage recognised a parameter: every record, in order.
pub fn fallback(dataset: &Dataset) -> Vec<&MovieRecord> {
    dataset.movies().iter().collect()
}
