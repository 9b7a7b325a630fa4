use serde::{Deserialize, Serialize};

use crate::ScraperResult;

const DEFAULT_CATEGORIES: &str = include_str!("../../resources/categories.json");

/// A listing page together with the number of products it is known to hold.
///
/// The count cannot be read off the page, so it travels with the target as
/// configuration data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTarget {
    pub name: String,
    /// Path relative to the configured base URL. Empty means the base itself.
    pub path: String,
    pub expected_count: usize,
}

impl CategoryTarget {
    pub fn new(name: impl Into<String>, path: impl Into<String>, expected_count: usize) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            expected_count,
        }
    }

    pub fn from_json(json: &str) -> ScraperResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// The six categories of the demo shop, in scraping order.
    pub fn defaults() -> ScraperResult<Vec<Self>> {
        Self::from_json(DEFAULT_CATEGORIES)
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}
