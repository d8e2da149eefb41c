//! Stage for the `avg_vote` query parameter.
//!
//! Keeps movies rated at or above a numeric threshold.

use super::select;
use crate::error::{FilterError, Result};
use crate::query::QueryParams;
use crate::traits::{FilterStage, StageOutcome};
use data_loader::Dataset;

/// Keeps movies whose `avg_vote` is >= the requested threshold.
///
/// ## Algorithm
/// 1. Trim surrounding whitespace and parse the value as `f64`
/// 2. Reject anything that does not parse or is not finite ("nan", "inf")
/// 3. Keep records with `avg_vote >= threshold` (boundary inclusive)
pub struct AvgVoteFilter;

impl AvgVoteFilter {
    pub const PARAM: &'static str = "avg_vote";

    fn parse_threshold(raw: &str) -> Result<f64> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|threshold| threshold.is_finite())
            .ok_or_else(|| FilterError::InvalidArgument {
                param: Self::PARAM,
                expected: "a number",
                value: raw.to_string(),
            })
    }
}

impl FilterStage for AvgVoteFilter {
    fn name(&self) -> &str {
        "AvgVoteFilter"
    }

    fn param(&self) -> &str {
        Self::PARAM
    }

    fn apply<'a>(&self, params: &QueryParams, dataset: &'a Dataset) -> Result<StageOutcome<'a>> {
        let Some(raw) = params.get(Self::PARAM) else {
            return Ok(StageOutcome::Deferred);
        };

        let threshold = Self::parse_threshold(raw)?;
        let movies = select(dataset, |movie| movie.avg_vote >= threshold);
        Ok(StageOutcome::Matched(movies))
    }
}
