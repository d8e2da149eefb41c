//! Core domain types for the movie dataset.
//!
//! The dataset is loaded once and then only ever read. Nothing in this
//! module hands out a mutable reference to a record after construction.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Movie Record
// =============================================================================

/// A single movie from the dataset.
///
/// Only the three fields the filters look at are typed. Everything else in
/// the source document (title, year, director, ...) rides along in `extra`
/// and is written back out untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub genre: String,
    pub country: String,
    pub avg_vote: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieRecord {
    /// Build a record with no passthrough fields.
    pub fn new(genre: impl Into<String>, country: impl Into<String>, avg_vote: f64) -> Self {
        Self {
            genre: genre.into(),
            country: country.into(),
            avg_vote,
            extra: Map::new(),
        }
    }

    /// Attach a passthrough field (builder style, mostly for tests and fixtures).
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Title of the film, if the source document carried one.
    pub fn title(&self) -> Option<&str> {
        self.extra.get("film_title").and_then(Value::as_str)
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Shape of the dataset document on disk: `{ "movies": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct DatasetDocument {
    pub movies: Vec<MovieRecord>,
}

/// The ordered, immutable collection of movies served by the API.
///
/// Shared between requests as `Arc<Dataset>`. Filtering produces borrowed
/// views (`Vec<&MovieRecord>`) rather than copies.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    movies: Vec<MovieRecord>,
}

impl Dataset {
    /// Create a dataset from records already in memory, keeping their order.
    pub fn from_movies(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// All records in original order.
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl FromIterator<MovieRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        Self::from_movies(iter.into_iter().collect())
    }
}
