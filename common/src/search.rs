use std::collections::HashSet;

use rapidfuzz::fuzz;

use crate::product::{Product, ProductId};

/// Default similarity (0.0..=1.0) a name must reach to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Approximate name lookup over a product list.
///
/// Only membership of the returned set matters; ranking is not exposed.
pub trait NameSearch {
    fn search_by_name(&self, products: &[Product], query: &str) -> HashSet<ProductId>;
}

/// Case-insensitive fuzzy matcher tolerant of typos and partial input.
///
/// A name matches when it contains the query, or when the query is similar
/// enough to the whole name, to one of its words, or to the start of a word.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyNameSearch {
    threshold: f64,
}

impl FuzzyNameSearch {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Best similarity between `query` and `name`, both compared lowercased.
    pub fn score(&self, name: &str, query: &str) -> f64 {
        let name = name.to_lowercase();
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return 0.0;
        }
        if name.contains(&query) {
            return 1.0;
        }

        let query_len = query.chars().count();
        let mut best = fuzz::ratio(query.chars(), name.chars());
        for word in name.split_whitespace() {
            best = best.max(fuzz::ratio(query.chars(), word.chars()));
            if word.chars().count() > query_len {
                let prefix: String = word.chars().take(query_len).collect();
                best = best.max(fuzz::ratio(query.chars(), prefix.chars()));
            }
        }
        best
    }

    pub fn is_match(&self, name: &str, query: &str) -> bool {
        self.score(name, query) >= self.threshold
    }
}

impl Default for FuzzyNameSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSearch for FuzzyNameSearch {
    fn search_by_name(&self, products: &[Product], query: &str) -> HashSet<ProductId> {
        products
            .iter()
            .filter(|p| self.is_match(&p.name, query))
            .map(|p| p.id.clone())
            .collect()
    }
}
