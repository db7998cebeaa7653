use std::collections::HashSet;

use crate::constants::search::{DEFAULT_BASE_GROUPS, DEFAULT_MAX_LEVEL};
use crate::errors::SearchError;
use crate::types::GroupLabel;

/// Search control configuration.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Subtree labels of the first candidate partition evaluated.
    pub base_groups: Vec<GroupLabel>,
    /// Hard cap on the subtree count; the search stops once it is reached.
    pub max_level: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_groups: DEFAULT_BASE_GROUPS
                .iter()
                .map(|label| label.to_string())
                .collect(),
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl SearchConfig {
    /// Validate that the configuration describes a runnable search.
    pub fn validated(self) -> Result<Self, SearchError> {
        if self.base_groups.len() < 2 {
            return Err(SearchError::InvalidConfig(
                "base partition needs at least two subtree labels".to_string(),
            ));
        }
        if self.base_groups.iter().any(|label| label.is_empty()) {
            return Err(SearchError::InvalidConfig(
                "subtree labels must be non-empty".to_string(),
            ));
        }
        let distinct: HashSet<&GroupLabel> = self.base_groups.iter().collect();
        if distinct.len() != self.base_groups.len() {
            return Err(SearchError::InvalidConfig(
                "base partition labels must be distinct".to_string(),
            ));
        }
        if self.max_level < self.base_groups.len() {
            return Err(SearchError::InvalidConfig(format!(
                "max_level {} is below the base partition size {}",
                self.max_level,
                self.base_groups.len()
            )));
        }
        Ok(self)
    }
}
