//! Request-filtering pipeline for the movie API.
//!
//! This crate provides:
//! - `QueryParams`, the raw query-string view the stages read from
//! - The `FilterStage` trait and the genre / country / avg_vote stages
//! - `FilterChain`, which runs stages in priority order and stops at the
//!   first one that matches, falling back to the full dataset
//!
//! ## Architecture
//! Each stage looks at exactly one query parameter:
//! 1. Parameter absent (or empty): the stage defers to the next one
//! 2. Parameter present: the stage produces the response and the chain halts,
//!    even when the resulting list is empty
//! 3. Parameter invalid: the stage returns an error and the chain halts
//!
//! Only one filter is honoured per request. `?genre=drama&country=france`
//! filters by genre and ignores country.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterChain, QueryParams};
//!
//! let chain = FilterChain::standard();
//! let params: QueryParams = [("genre", "comedy")].into_iter().collect();
//! let movies = chain.run(&params, &dataset)?;
//! ```

pub mod error;
pub mod filter_chain;
pub mod filters;
pub mod query;
pub mod traits;

// Re-export main types
pub use error::{FilterError, Result};
pub use filter_chain::{FilterChain, fallback};
pub use query::QueryParams;
pub use traits::{FilterStage, StageOutcome};
