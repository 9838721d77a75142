//! Permission value type
//!
//! A `Permission` is an immutable record. Its `implied_by` list holds owned
//! copies of the permissions that also grant it, forming an acyclic graph the
//! authorization layer walks to decide effective access.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete security permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    name: String,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    implied_by: Vec<Permission>,
}

impl Permission {
    /// Create a permission with no category and nothing implying it
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: None,
            implied_by: Vec::new(),
        }
    }

    /// Set the permissions that imply this one
    pub fn with_implied_by(mut self, implied_by: impl IntoIterator<Item = Permission>) -> Self {
        self.implied_by = implied_by.into_iter().collect();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn implied_by(&self) -> &[Permission] {
        &self.implied_by
    }

    /// Check whether holding `name` grants this permission
    ///
    /// A permission grants itself; otherwise the implied-by graph is searched
    /// depth-first.
    pub fn is_implied_by(&self, name: &str) -> bool {
        self.name == name || self.implied_by.iter().any(|p| p.is_implied_by(name))
    }

    /// Names of every permission that grants this one, including itself
    ///
    /// Depth-first, first occurrence wins, so shared ancestors appear once.
    pub fn implying_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        if names.contains(&self.name.as_str()) {
            return;
        }
        names.push(&self.name);
        for parent in &self.implied_by {
            parent.collect_names(names);
        }
    }

    /// Length of the longest implied-by chain below this permission
    pub fn depth(&self) -> usize {
        self.implied_by
            .iter()
            .map(|p| p.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
