//! Template registry
//!
//! Maps canonical global permission names to the templates that generate
//! their per-content-type counterparts. Built once, read-only afterwards;
//! share it as `Arc<PermissionTemplates>`.

use std::collections::HashMap;

use super::catalog::GlobalPermission;
use super::permission::Permission;
use super::template::ImpliedBy::{self, Global, Template};
use super::template::{Pattern, PermissionTemplate, TemplateId};

/// Registry of the built-in content permission templates
#[derive(Debug, Clone)]
pub struct PermissionTemplates {
    templates: HashMap<&'static str, PermissionTemplate>,
}

impl PermissionTemplates {
    /// Build the registry with every content permission template
    pub fn new() -> Self {
        let templates: HashMap<_, _> = TemplateId::ALL
            .into_iter()
            .map(builtin)
            .map(|t| (t.canonical_name(), t))
            .collect();

        tracing::info!(
            "Built permission template registry with {} templates",
            templates.len()
        );

        Self { templates }
    }

    /// Find the template keyed by a canonical permission name
    pub fn lookup(&self, name: &str) -> Option<&PermissionTemplate> {
        self.templates.get(name)
    }

    /// Find the template for a global permission, if it is dynamic-capable
    pub fn template_for(&self, permission: &Permission) -> Option<&PermissionTemplate> {
        self.lookup(permission.name())
    }

    /// Get a template by id
    pub fn get(&self, id: TemplateId) -> Option<&PermissionTemplate> {
        self.lookup(id.global().name())
    }

    /// Check whether a canonical name has a template
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Iterate templates in `TemplateId::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = &PermissionTemplate> + '_ {
        TemplateId::ALL.into_iter().filter_map(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for PermissionTemplates {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed template table
fn builtin(id: TemplateId) -> PermissionTemplate {
    let (verb, description, implied_by): (&str, (&str, &str), Vec<ImpliedBy>) = match id {
        TemplateId::Publish => (
            "Publish",
            ("Publish or unpublish ", " for others"),
            vec![Global(GlobalPermission::PublishContent)],
        ),
        TemplateId::PublishOwn => (
            "PublishOwn",
            ("Publish or unpublish ", ""),
            vec![
                Template(TemplateId::Publish),
                Global(GlobalPermission::PublishOwnContent),
            ],
        ),
        TemplateId::Edit => (
            "Edit",
            ("Edit ", " for others"),
            vec![
                Template(TemplateId::Publish),
                Global(GlobalPermission::EditContent),
            ],
        ),
        TemplateId::EditOwn => (
            "EditOwn",
            ("Edit ", ""),
            vec![
                Template(TemplateId::Edit),
                Template(TemplateId::PublishOwn),
                Global(GlobalPermission::EditOwnContent),
            ],
        ),
        TemplateId::Delete => (
            "Delete",
            ("Delete ", " for others"),
            vec![Global(GlobalPermission::DeleteContent)],
        ),
        TemplateId::DeleteOwn => (
            "DeleteOwn",
            ("Delete ", ""),
            vec![
                Template(TemplateId::Delete),
                Global(GlobalPermission::DeleteOwnContent),
            ],
        ),
        TemplateId::View => (
            "View",
            ("View ", " by others"),
            vec![
                Template(TemplateId::Edit),
                Global(GlobalPermission::ViewContent),
            ],
        ),
        TemplateId::ViewOwn => (
            "ViewOwn",
            ("View own ", ""),
            vec![
                Template(TemplateId::View),
                Global(GlobalPermission::ViewOwnContent),
            ],
        ),
        TemplateId::Preview => (
            "Preview",
            ("Preview ", " by others"),
            vec![
                Template(TemplateId::Edit),
                Global(GlobalPermission::PreviewContent),
            ],
        ),
        TemplateId::PreviewOwn => (
            "PreviewOwn",
            ("Preview own ", ""),
            vec![
                Template(TemplateId::Preview),
                Global(GlobalPermission::PreviewOwnContent),
            ],
        ),
        TemplateId::Clone => (
            "Clone",
            ("Clone ", " by others"),
            vec![
                Template(TemplateId::Edit),
                Global(GlobalPermission::CloneContent),
            ],
        ),
        TemplateId::CloneOwn => (
            "CloneOwn",
            ("Clone own ", ""),
            vec![
                Template(TemplateId::Clone),
                Global(GlobalPermission::CloneOwnContent),
            ],
        ),
        TemplateId::ListContent => (
            "ListContent",
            ("List ", " content items"),
            vec![Global(GlobalPermission::ListContent)],
        ),
        TemplateId::EditContentOwner => (
            "EditContentOwner",
            ("Edit the owner of a ", " content item"),
            vec![Global(GlobalPermission::EditContentOwner)],
        ),
    };

    PermissionTemplate::from_patterns(
        id,
        Pattern::around(format!("{}_", verb), ""),
        Pattern::around(description.0, description.1),
        implied_by,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_canonical_names_resolve() {
        let registry = PermissionTemplates::new();
        assert_eq!(registry.len(), 14);
        assert!(!registry.is_empty());

        let expected = [
            ("PublishContent", "Publish_T"),
            ("PublishOwnContent", "PublishOwn_T"),
            ("EditContent", "Edit_T"),
            ("EditOwnContent", "EditOwn_T"),
            ("DeleteContent", "Delete_T"),
            ("DeleteOwnContent", "DeleteOwn_T"),
            ("ViewContent", "View_T"),
            ("ViewOwnContent", "ViewOwn_T"),
            ("PreviewContent", "Preview_T"),
            ("PreviewOwnContent", "PreviewOwn_T"),
            ("CloneContent", "Clone_T"),
            ("CloneOwnContent", "CloneOwn_T"),
            ("ListContent", "ListContent_T"),
            ("EditContentOwner", "EditContentOwner_T"),
        ];

        for (canonical, rendered) in expected {
            let template = registry.lookup(canonical).unwrap();
            assert_eq!(template.name().render("T"), rendered);
            assert_eq!(template.canonical_name(), canonical);
        }
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let registry = PermissionTemplates::new();
        assert!(registry.lookup("ManageSettings").is_none());
        assert!(registry.lookup("Edit_{0}").is_none());
        assert!(!registry.contains("AccessContentApi"));
    }

    #[test]
    fn test_description_patterns() {
        let registry = PermissionTemplates::new();
        let describe = |id| registry.get(id).unwrap().description().to_string();

        assert_eq!(describe(TemplateId::Publish), "Publish or unpublish {0} for others");
        assert_eq!(describe(TemplateId::PublishOwn), "Publish or unpublish {0}");
        assert_eq!(describe(TemplateId::EditOwn), "Edit {0}");
        assert_eq!(describe(TemplateId::ViewOwn), "View own {0}");
        assert_eq!(
            describe(TemplateId::EditContentOwner),
            "Edit the owner of a {0} content item"
        );
    }

    #[test]
    fn test_implied_by_table() {
        let registry = PermissionTemplates::new();
        let edit_own = registry.lookup("EditOwnContent").unwrap();

        assert_eq!(
            edit_own.implied_by(),
            &[
                Template(TemplateId::Edit),
                Template(TemplateId::PublishOwn),
                Global(GlobalPermission::EditOwnContent),
            ]
        );

        // every template ends with its own global permission
        for template in registry.iter() {
            assert_eq!(
                template.implied_by().last(),
                Some(&Global(template.id().global()))
            );
        }
    }

    #[test]
    fn test_template_for_permission() {
        let registry = PermissionTemplates::new();

        let global = GlobalPermission::CloneOwnContent.permission();
        let template = registry.template_for(&global).unwrap();
        assert_eq!(template.id(), TemplateId::CloneOwn);

        let other = Permission::new("ManageUsers", "Manage users");
        assert!(registry.template_for(&other).is_none());
    }

    #[test]
    fn test_builtin_patterns_reparse() {
        let registry = PermissionTemplates::new();
        for template in registry.iter() {
            for pattern in [template.name(), template.description()] {
                let reparsed = Pattern::parse(&pattern.to_string()).unwrap();
                assert_eq!(&reparsed, pattern);
                assert!(reparsed.has_placeholder());
            }
        }
    }

    #[test]
    fn test_iter_order() {
        let registry = PermissionTemplates::new();
        let ids: Vec<_> = registry.iter().map(|t| t.id()).collect();
        assert_eq!(ids, TemplateId::ALL.to_vec());
    }
}
