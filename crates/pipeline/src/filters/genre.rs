//! Stage for the `genre` query parameter.
//!
//! Keeps movies whose genre field contains the requested text,
//! ignoring case. `?genre=fi` matches "Sci-Fi" and "Film-Noir, Fiction".

use super::{contains_ignore_case, select};
use crate::error::Result;
use crate::query::QueryParams;
use crate::traits::{FilterStage, StageOutcome};
use data_loader::Dataset;

pub struct GenreFilter;

impl GenreFilter {
    pub const PARAM: &'static str = "genre";
}

impl FilterStage for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn param(&self) -> &str {
        Self::PARAM
    }

    fn apply<'a>(&self, params: &QueryParams, dataset: &'a Dataset) -> Result<StageOutcome<'a>> {
        let Some(genre) = params.get(Self::PARAM) else {
            return Ok(StageOutcome::Deferred);
        };

        let needle = genre.to_lowercase();
        let movies = select(dataset, |movie| contains_ignore_case(&movie.genre, &needle));
        Ok(StageOutcome::Matched(movies))
    }
}
