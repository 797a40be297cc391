//! Component search.
//!
//! This module provides:
//! - Relevance-ranked free-text search over component summaries
//! - Structural filtering of full contracts

mod filter;
mod ranking;

pub use filter::{filter_contracts, ComponentFilter};
pub use ranking::{relevance_score, search, SearchOptions};
