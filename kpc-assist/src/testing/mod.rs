//! Testing utilities.
//!
//! This module provides a small, realistic component catalog used by the
//! crate's own tests and benchmarks.

mod fixtures;

pub use fixtures::{
    button_contract, form_contract, form_item_contract, input_contract, sample_catalog,
    sample_summaries, spinner_contract, table_contract,
};
