//! Recommendation output: RecommendationSet

use serde::{Deserialize, Serialize};

/// Suggested tests and medicines, each unique and in first-trigger order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub tests: Vec<String>,
    pub medicines: Vec<String>,
}

impl RecommendationSet {
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty() && self.medicines.is_empty()
    }
}
