//! Stage for the `country` query parameter.

use super::{contains_ignore_case, select};
use crate::error::Result;
use crate::query::QueryParams;
use crate::traits::{FilterStage, StageOutcome};
use data_loader::Dataset;

/// Keeps movies whose country field contains the requested text, ignoring case.
///
/// Co-productions list several countries ("France, Germany"), so a substring
/// match finds them under either name.
pub struct CountryFilter;

impl CountryFilter {
    pub const PARAM: &'static str = "country";
}

impl FilterStage for CountryFilter {
    fn name(&self) -> &str {
        "CountryFilter"
    }

    fn param(&self) -> &str {
        Self::PARAM
    }

    fn apply<'a>(&self, params: &QueryParams, dataset: &'a Dataset) -> Result<StageOutcome<'a>> {
        let Some(country) = params.get(Self::PARAM) else {
            return Ok(StageOutcome::Deferred);
        };

        let needle = country.to_lowercase();
        let movies = select(dataset, |movie| contains_ignore_case(&movie.country, &needle));
        Ok(StageOutcome::Matched(movies))
    }
}
