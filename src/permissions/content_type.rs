//! Content type definitions as seen by the permission layer

use serde::{Deserialize, Serialize};

/// The parts of a content type definition that permissions depend on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeDefinition {
    /// Stable technical name (used in permission names and cache keys)
    pub name: String,

    /// Human-facing name (used in descriptions and categories)
    pub display_name: String,

    /// Whether per-type permissions are generated for this type
    #[serde(default = "default_securable")]
    pub securable: bool,
}

fn default_securable() -> bool {
    true
}

impl ContentTypeDefinition {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            securable: true,
        }
    }

    /// Set whether the type is securable
    pub fn with_securable(mut self, securable: bool) -> Self {
        self.securable = securable;
        self
    }

    /// Category label shared by all permissions generated for this type
    pub fn category(&self) -> String {
        format!("{} Content Type - {}", self.display_name, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        let def = ContentTypeDefinition::new("BlogPost", "Blog Post");
        assert_eq!(def.category(), "Blog Post Content Type - BlogPost");
    }

    #[test]
    fn test_securable_defaults_to_true() {
        let def: ContentTypeDefinition =
            serde_json::from_str(r#"{"name": "Article", "display_name": "Article"}"#).unwrap();
        assert!(def.securable);

        let def = def.with_securable(false);
        assert!(!def.securable);
    }
}
