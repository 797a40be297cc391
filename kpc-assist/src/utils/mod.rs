//! Shared string utilities.
//!
//! Currently hosts the similarity matcher behind "did you mean" hints.

mod similarity;

pub use similarity::{
    find_closest, find_closest_with_threshold, levenshtein_distance, similarity,
    DEFAULT_SIMILARITY_THRESHOLD,
};
