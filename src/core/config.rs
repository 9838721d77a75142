//! Permission cache configuration
//!
//! Loaded from JSON by the host application, typically at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::{PermissionError, PermissionResult};
use crate::permissions::ContentTypeDefinition;

/// Configuration for the dynamic permission cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Content types known at startup
    #[serde(default)]
    pub content_types: Vec<ContentTypeDefinition>,

    /// Whether to pre-materialize permissions for `content_types`
    #[serde(default = "default_warm_on_start")]
    pub warm_on_start: bool,
}

fn default_warm_on_start() -> bool {
    true
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            content_types: Vec::new(),
            warm_on_start: default_warm_on_start(),
        }
    }
}

impl PermissionsConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a content type
    pub fn add_content_type(mut self, definition: ContentTypeDefinition) -> Self {
        self.content_types.push(definition);
        self
    }

    /// Set whether to warm the cache on start
    pub fn with_warm_on_start(mut self, warm: bool) -> Self {
        self.warm_on_start = warm;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> PermissionResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> PermissionResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading permissions config from {:?}", path);
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject empty or duplicate content type names
    pub fn validate(&self) -> PermissionResult<()> {
        let mut seen = HashSet::new();
        for definition in &self.content_types {
            if definition.name.trim().is_empty() {
                return Err(PermissionError::invalid_config(
                    "content type name must not be empty",
                ));
            }
            if !seen.insert(definition.name.as_str()) {
                return Err(PermissionError::invalid_config(format!(
                    "duplicate content type '{}'",
                    definition.name
                )));
            }
        }
        Ok(())
    }

    /// Content types that get per-type permissions
    pub fn securable_types(&self) -> impl Iterator<Item = &ContentTypeDefinition> + '_ {
        self.content_types.iter().filter(|d| d.securable)
    }
}
