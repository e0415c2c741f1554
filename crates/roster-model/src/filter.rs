//! Transient search and role selection for the directory view.

use serde::{Deserialize, Serialize};

/// What the visitor typed in the search box and picked in the role select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub role: String,
}

impl FilterState {
    pub fn new(search: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            role: role.into(),
        }
    }

    /// Returns true when either control narrows the list.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.role.is_empty()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.role.clear();
    }
}
