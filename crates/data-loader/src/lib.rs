//! # Data Loader Crate
//!
//! This crate owns the movie dataset served by the API.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and the immutable `Dataset`
//! - **loader**: Read the `{ "movies": [...] }` JSON document from disk
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("data/movie-data.json"))?;
//! println!("{} movies loaded", dataset.len());
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Dataset, MovieRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }

    #[test]
    fn test_from_iter_preserves_order() {
        let dataset: Dataset = vec![
            MovieRecord::new("Comedy", "France", 7.1),
            MovieRecord::new("Drama", "Japan", 8.0),
            MovieRecord::new("Horror", "Spain", 5.4),
        ]
        .into_iter()
        .collect();

        let genres: Vec<&str> = dataset.movies().iter().map(|m| m.genre.as_str()).collect();
        assert_eq!(genres, vec!["Comedy", "Drama", "Horror"]);
    }

    #[test]
    fn test_record_serializes_passthrough_fields() {
        let movie = MovieRecord::new("Western", "Italy", 8.8)
            .with_field("film_title", "The Good, the Bad and the Ugly")
            .with_field("year", 1966);

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["genre"], "Western");
        assert_eq!(json["avg_vote"], 8.8);
        assert_eq!(json["film_title"], "The Good, the Bad and the Ugly");
        assert_eq!(json["year"], 1966);
    }
}
