//! Filter stage implementations.
//!
//! Each stage owns one query parameter. They are composed, in priority
//! order, by `FilterChain::standard()`.

pub mod avg_vote;
pub mod country;
pub mod genre;

// Re-export for convenience
pub use avg_vote::AvgVoteFilter;
pub use country::CountryFilter;
pub use genre::GenreFilter;

use data_loader::{Dataset, MovieRecord};
use rayon::prelude::*;

/// Keep the records matching `predicate`, in dataset order.
///
/// Rayon's collect into a `Vec` preserves the source order, so the result
/// is a stable filter even though records are tested in parallel.
pub(crate) fn select<'a, P>(dataset: &'a Dataset, predicate: P) -> Vec<&'a MovieRecord>
where
    P: Fn(&MovieRecord) -> bool + Sync + Send,
{
    dataset
        .movies()
        .par_iter()
        .filter(|movie| predicate(*movie))
        .collect()
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
