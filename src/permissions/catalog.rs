//! Global content permissions
//!
//! The canonical, type-independent content permissions. Each per-type template
//! is keyed by one of these and lists it as its most general parent.

use serde::{Deserialize, Serialize};

use super::permission::Permission;

/// A global content permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlobalPermission {
    PublishContent,
    PublishOwnContent,
    EditContent,
    EditOwnContent,
    DeleteContent,
    DeleteOwnContent,
    ViewContent,
    ViewOwnContent,
    PreviewContent,
    PreviewOwnContent,
    CloneContent,
    CloneOwnContent,
    ListContent,
    EditContentOwner,
}

impl GlobalPermission {
    pub const ALL: [GlobalPermission; 14] = [
        GlobalPermission::PublishContent,
        GlobalPermission::PublishOwnContent,
        GlobalPermission::EditContent,
        GlobalPermission::EditOwnContent,
        GlobalPermission::DeleteContent,
        GlobalPermission::DeleteOwnContent,
        GlobalPermission::ViewContent,
        GlobalPermission::ViewOwnContent,
        GlobalPermission::PreviewContent,
        GlobalPermission::PreviewOwnContent,
        GlobalPermission::CloneContent,
        GlobalPermission::CloneOwnContent,
        GlobalPermission::ListContent,
        GlobalPermission::EditContentOwner,
    ];

    /// Canonical permission name
    pub fn name(self) -> &'static str {
        match self {
            GlobalPermission::PublishContent => "PublishContent",
            GlobalPermission::PublishOwnContent => "PublishOwnContent",
            GlobalPermission::EditContent => "EditContent",
            GlobalPermission::EditOwnContent => "EditOwnContent",
            GlobalPermission::DeleteContent => "DeleteContent",
            GlobalPermission::DeleteOwnContent => "DeleteOwnContent",
            GlobalPermission::ViewContent => "ViewContent",
            GlobalPermission::ViewOwnContent => "ViewOwnContent",
            GlobalPermission::PreviewContent => "PreviewContent",
            GlobalPermission::PreviewOwnContent => "PreviewOwnContent",
            GlobalPermission::CloneContent => "CloneContent",
            GlobalPermission::CloneOwnContent => "CloneOwnContent",
            GlobalPermission::ListContent => "ListContent",
            GlobalPermission::EditContentOwner => "EditContentOwner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GlobalPermission::PublishContent => "Publish or unpublish content for others",
            GlobalPermission::PublishOwnContent => "Publish or unpublish own content",
            GlobalPermission::EditContent => "Edit content for others",
            GlobalPermission::EditOwnContent => "Edit own content",
            GlobalPermission::DeleteContent => "Delete content for others",
            GlobalPermission::DeleteOwnContent => "Delete own content",
            GlobalPermission::ViewContent => "View all content",
            GlobalPermission::ViewOwnContent => "View own content",
            GlobalPermission::PreviewContent => "Preview content",
            GlobalPermission::PreviewOwnContent => "Preview own content",
            GlobalPermission::CloneContent => "Clone content",
            GlobalPermission::CloneOwnContent => "Clone own content",
            GlobalPermission::ListContent => "List content items",
            GlobalPermission::EditContentOwner => "Edit the owner of a content item",
        }
    }

    /// Global permissions that imply this one
    pub fn implied_by(self) -> &'static [GlobalPermission] {
        use GlobalPermission::*;
        match self {
            PublishOwnContent => &[PublishContent],
            EditContent => &[PublishContent],
            EditOwnContent => &[EditContent, PublishOwnContent],
            DeleteOwnContent => &[DeleteContent],
            ViewContent => &[EditContent],
            ViewOwnContent => &[ViewContent],
            PreviewContent => &[EditContent],
            PreviewOwnContent => &[PreviewContent],
            CloneContent => &[EditContent],
            CloneOwnContent => &[CloneContent],
            PublishContent | DeleteContent | ListContent | EditContentOwner => &[],
        }
    }

    /// Build the permission value with its full implied-by chain
    pub fn permission(self) -> Permission {
        Permission::new(self.name(), self.description())
            .with_implied_by(self.implied_by().iter().map(|p| p.permission()))
    }

    /// Find a global permission by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for global in GlobalPermission::ALL {
            assert_eq!(GlobalPermission::from_name(global.name()), Some(global));
        }
        assert_eq!(GlobalPermission::from_name("ManageSettings"), None);
    }

    #[test]
    fn test_edit_own_hierarchy() {
        let perm = GlobalPermission::EditOwnContent.permission();
        let parents: Vec<_> = perm.implied_by().iter().map(|p| p.name()).collect();

        assert_eq!(parents, vec!["EditContent", "PublishOwnContent"]);
        assert!(perm.is_implied_by("PublishContent"));
        assert!(!perm.is_implied_by("DeleteContent"));
    }

    #[test]
    fn test_roots_have_no_parents() {
        for global in [
            GlobalPermission::PublishContent,
            GlobalPermission::DeleteContent,
            GlobalPermission::ListContent,
            GlobalPermission::EditContentOwner,
        ] {
            assert!(global.permission().implied_by().is_empty());
        }
    }
}
