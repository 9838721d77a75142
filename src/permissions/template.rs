//! Permission templates
//!
//! A template is a permission whose name and description carry a single
//! `{0}` placeholder for a content type. Templates reference their parents by
//! `TemplateId` or `GlobalPermission`, never by shared instance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::GlobalPermission;
use crate::core::{PermissionError, PermissionResult};

const PLACEHOLDER: &str = "{0}";

/// Identifies a template family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateId {
    Publish,
    PublishOwn,
    Edit,
    EditOwn,
    Delete,
    DeleteOwn,
    View,
    ViewOwn,
    Preview,
    PreviewOwn,
    Clone,
    CloneOwn,
    ListContent,
    EditContentOwner,
}

impl TemplateId {
    pub const ALL: [TemplateId; 14] = [
        TemplateId::Publish,
        TemplateId::PublishOwn,
        TemplateId::Edit,
        TemplateId::EditOwn,
        TemplateId::Delete,
        TemplateId::DeleteOwn,
        TemplateId::View,
        TemplateId::ViewOwn,
        TemplateId::Preview,
        TemplateId::PreviewOwn,
        TemplateId::Clone,
        TemplateId::CloneOwn,
        TemplateId::ListContent,
        TemplateId::EditContentOwner,
    ];

    /// The global permission this template specializes
    pub fn global(self) -> GlobalPermission {
        match self {
            TemplateId::Publish => GlobalPermission::PublishContent,
            TemplateId::PublishOwn => GlobalPermission::PublishOwnContent,
            TemplateId::Edit => GlobalPermission::EditContent,
            TemplateId::EditOwn => GlobalPermission::EditOwnContent,
            TemplateId::Delete => GlobalPermission::DeleteContent,
            TemplateId::DeleteOwn => GlobalPermission::DeleteOwnContent,
            TemplateId::View => GlobalPermission::ViewContent,
            TemplateId::ViewOwn => GlobalPermission::ViewOwnContent,
            TemplateId::Preview => GlobalPermission::PreviewContent,
            TemplateId::PreviewOwn => GlobalPermission::PreviewOwnContent,
            TemplateId::Clone => GlobalPermission::CloneContent,
            TemplateId::CloneOwn => GlobalPermission::CloneOwnContent,
            TemplateId::ListContent => GlobalPermission::ListContent,
            TemplateId::EditContentOwner => GlobalPermission::EditContentOwner,
        }
    }
}

/// A parent of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpliedBy {
    /// Another template, materialized with the same content type
    Template(TemplateId),
    /// A global permission, used as-is
    Global(GlobalPermission),
}

/// A format string with at most one `{0}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    prefix: String,
    suffix: Option<String>,
}

impl Pattern {
    /// Parse a pattern, rejecting stray braces and repeated placeholders
    pub fn parse(text: &str) -> PermissionResult<Self> {
        let (prefix, suffix) = match text.find(PLACEHOLDER) {
            Some(at) => (&text[..at], Some(&text[at + PLACEHOLDER.len()..])),
            None => (text, None),
        };

        if suffix.is_some_and(|s| s.contains(PLACEHOLDER)) {
            return Err(PermissionError::invalid_pattern(
                text,
                "more than one placeholder",
            ));
        }
        if prefix.contains(['{', '}']) || suffix.is_some_and(|s| s.contains(['{', '}'])) {
            return Err(PermissionError::invalid_pattern(text, "unbalanced brace"));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.map(str::to_string),
        })
    }

    /// Build a pattern with the placeholder between brace-free `prefix` and `suffix`
    pub(crate) fn around(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: Some(suffix.into()),
        }
    }

    /// Substitute `value` for the placeholder
    pub fn render(&self, value: &str) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}{}{}", self.prefix, value, suffix),
            None => self.prefix.clone(),
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.suffix.is_some()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            Some(suffix) => write!(f, "{}{}{}", self.prefix, PLACEHOLDER, suffix),
            None => f.write_str(&self.prefix),
        }
    }
}

/// A permission template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTemplate {
    id: TemplateId,
    name: Pattern,
    description: Pattern,
    implied_by: Vec<ImpliedBy>,
}

impl PermissionTemplate {
    /// Create a template from pattern text
    pub fn new(
        id: TemplateId,
        name: &str,
        description: &str,
        implied_by: impl IntoIterator<Item = ImpliedBy>,
    ) -> PermissionResult<Self> {
        Ok(Self {
            id,
            name: Pattern::parse(name)?,
            description: Pattern::parse(description)?,
            implied_by: implied_by.into_iter().collect(),
        })
    }

    /// Create a template from already-built patterns
    pub fn from_patterns(
        id: TemplateId,
        name: Pattern,
        description: Pattern,
        implied_by: impl IntoIterator<Item = ImpliedBy>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            implied_by: implied_by.into_iter().collect(),
        }
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn name(&self) -> &Pattern {
        &self.name
    }

    pub fn description(&self) -> &Pattern {
        &self.description
    }

    pub fn implied_by(&self) -> &[ImpliedBy] {
        &self.implied_by
    }

    /// Canonical name of the global permission this template is keyed by
    pub fn canonical_name(&self) -> &'static str {
        self.id.global().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_render() {
        let pattern = Pattern::parse("Edit_{0}").unwrap();
        assert!(pattern.has_placeholder());
        assert_eq!(pattern.render("BlogPost"), "Edit_BlogPost");
        assert_eq!(pattern.to_string(), "Edit_{0}");
        assert_eq!(pattern, Pattern::around("Edit_", ""));

        let pattern = Pattern::parse("Edit the owner of a {0} content item").unwrap();
        assert_eq!(
            pattern.render("Article"),
            "Edit the owner of a Article content item"
        );
    }

    #[test]
    fn test_pattern_without_placeholder_is_literal() {
        let pattern = Pattern::parse("EditContent").unwrap();
        assert!(!pattern.has_placeholder());
        assert_eq!(pattern.render("BlogPost"), "EditContent");
    }

    #[test]
    fn test_pattern_rejects_bad_input() {
        assert!(matches!(
            Pattern::parse("Edit_{0}_{0}"),
            Err(PermissionError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::parse("Edit_{1}"),
            Err(PermissionError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::parse("Edit_{0}}"),
            Err(PermissionError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_template_canonical_name() {
        let template = PermissionTemplate::new(
            TemplateId::Edit,
            "Edit_{0}",
            "Edit {0} for others",
            [
                ImpliedBy::Template(TemplateId::Publish),
                ImpliedBy::Global(GlobalPermission::EditContent),
            ],
        )
        .unwrap();

        assert_eq!(template.canonical_name(), "EditContent");
        assert_eq!(template.implied_by().len(), 2);
    }
}
