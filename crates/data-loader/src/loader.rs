//! Loading the dataset document from disk.
//!
//! The document format is a single JSON object with a `movies` array:
//!
//! ```json
//! { "movies": [ { "film_title": "...", "genre": "Comedy", "country": "France", "avg_vote": 6.7 } ] }
//! ```

use crate::error::{DataLoadError, Result};
use crate::types::{Dataset, DatasetDocument};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

impl Dataset {
    /// Load the dataset from a JSON file.
    ///
    /// Steps:
    /// 1. Open the file (missing file gets its own error variant)
    /// 2. Parse the `{ "movies": [...] }` document
    /// 3. Validate every record
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "Loading movie dataset");

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        let dataset = Self::load_from_reader(BufReader::new(file), path)?;

        tracing::info!(movies = dataset.len(), "Movie dataset loaded");
        Ok(dataset)
    }

    /// Parse a dataset document from any reader. `origin` is only used in error messages.
    pub fn load_from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let document: DatasetDocument =
            serde_json::from_reader(reader).map_err(|e| match e.classify() {
                serde_json::error::Category::Io => DataLoadError::IoError(e.into()),
                _ => DataLoadError::ParseError {
                    path: origin.to_path_buf(),
                    line: e.line(),
                    column: e.column(),
                    reason: e.to_string(),
                },
            })?;

        let dataset = Dataset::from_movies(document.movies);
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check invariants the filters rely on.
    ///
    /// serde_json never yields NaN or infinity, but datasets built in memory can.
    pub fn validate(&self) -> Result<()> {
        for (position, movie) in self.movies().iter().enumerate() {
            if !movie.avg_vote.is_finite() {
                return Err(DataLoadError::ValidationError(format!(
                    "movie at position {} has non-finite avg_vote {}",
                    position, movie.avg_vote
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovieRecord;

    fn load(json: &str) -> Result<Dataset> {
        Dataset::load_from_reader(json.as_bytes(), Path::new("inline.json"))
    }

    #[test]
    fn test_load_keeps_order_and_passthrough_fields() {
        let dataset = load(
            r#"{ "movies": [
                { "film_title": "Le Mans", "year": 1971, "genre": "Action", "country": "United States", "avg_vote": 6.8 },
                { "film_title": "Amelie", "genre": "Comedy, Romance", "country": "France", "avg_vote": 8.3, "votes": 700000 }
            ] }"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.movies()[0].title(), Some("Le Mans"));
        assert_eq!(dataset.movies()[1].genre, "Comedy, Romance");
        assert_eq!(dataset.movies()[1].extra["votes"], 700000);
    }

    #[test]
    fn test_load_missing_required_field() {
        let err = load(r#"{ "movies": [ { "genre": "Drama", "avg_vote": 5.0 } ] }"#).unwrap_err();

        match err {
            DataLoadError::ParseError { reason, line, .. } => {
                assert!(reason.contains("country"), "unexpected reason: {reason}");
                assert_eq!(line, 1);
            }
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_malformed_json() {
        let err = load("{ \"movies\": [").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::load_from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let dataset = Dataset::from_movies(vec![MovieRecord::new("Drama", "Italy", f64::NAN)]);
        assert!(matches!(
            dataset.validate(),
            Err(DataLoadError::ValidationError(_))
        ));
    }
}
