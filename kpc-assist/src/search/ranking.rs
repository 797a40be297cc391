//! Free-text search over component summaries.

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentSummary;

const NAME_EQUALS: u32 = 100;
const NAME_CONTAINS: u32 = 50;
const DESCRIPTION_CONTAINS: u32 = 30;
const TAG_CONTAINS: u32 = 20;
const TAG_EQUALS: u32 = 40;

/// Options narrowing a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Exact category the candidates must belong to.
    #[serde(default)]
    pub category: Option<String>,
    /// Match on any whitespace-separated term instead of the whole query.
    #[serde(default)]
    pub fuzzy: bool,
    /// Tags every candidate must carry, compared exactly.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SearchOptions {
    /// Creates options with no filters, in exact mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one category.
    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Switches to term matching.
    #[must_use]
    pub fn fuzzy(mut self) -> Self {
        self.fuzzy = true;
        self
    }

    /// Requires the given tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn admits(&self, summary: &ComponentSummary) -> bool {
        if let Some(category) = &self.category {
            if summary.category != *category {
                return false;
            }
        }
        self.tags.iter().all(|tag| summary.tags.contains(tag))
    }
}

/// Heuristic weight of `summary` for `query`; used only for ordering.
///
/// Comparisons are case-insensitive. A tag that both contains and equals
/// the query earns both bonuses.
#[must_use]
pub fn relevance_score(summary: &ComponentSummary, query: &str) -> u32 {
    let query = query.to_lowercase();
    let name = summary.name.to_lowercase();

    let mut score = 0;
    if name == query {
        score += NAME_EQUALS;
    }
    if name.contains(&query) {
        score += NAME_CONTAINS;
    }
    if summary.description.to_lowercase().contains(&query) {
        score += DESCRIPTION_CONTAINS;
    }
    for tag in &summary.tags {
        let tag = tag.to_lowercase();
        if tag.contains(&query) {
            score += TAG_CONTAINS;
        }
        if tag == query {
            score += TAG_EQUALS;
        }
    }
    score
}

/// Filters `candidates` by `options`, keeps those matching `query` and
/// orders them by descending relevance.
///
/// Candidates with equal scores keep their input order.
#[must_use]
pub fn search(
    query: &str,
    candidates: &[ComponentSummary],
    options: &SearchOptions,
) -> Vec<ComponentSummary> {
    let query = query.to_lowercase();
    let terms: Vec<&str> = query
        .split_whitespace()
        .filter(|term| term.chars().count() > 1)
        .collect();

    let mut scored: Vec<(u32, &ComponentSummary)> = candidates
        .iter()
        .filter(|summary| options.admits(summary))
        .filter(|summary| {
            let haystack = haystack(summary);
            if options.fuzzy {
                terms.iter().any(|term| haystack.contains(term))
            } else {
                haystack.contains(&query)
            }
        })
        .map(|summary| (relevance_score(summary, &query), summary))
        .collect();

    // `sort_by` is stable.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::trace!(
        query = %query,
        fuzzy = options.fuzzy,
        candidates = candidates.len(),
        matched = scored.len(),
        "Ranked search candidates"
    );
    scored.into_iter().map(|(_, summary)| summary.clone()).collect()
}

fn haystack(summary: &ComponentSummary) -> String {
    format!(
        "{} {} {}",
        summary.name.to_lowercase(),
        summary.description.to_lowercase(),
        summary.tags.join(" ").to_lowercase()
    )
}
