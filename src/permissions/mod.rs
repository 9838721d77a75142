//! Per-content-type permissions
//!
//! Global content permissions (edit, publish, delete, ...) are specialized for
//! each content type through templates:
//! - **Registry**: `PermissionTemplates` maps canonical names to templates
//! - **Cache**: `DynamicPermissionCache` materializes and caches the
//!   per-type permissions, recursing through the implied-by chain
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use content_type_permissions::permissions::{DynamicPermissionCache, PermissionTemplates};
//!
//! let templates = Arc::new(PermissionTemplates::new());
//! let cache = DynamicPermissionCache::new(templates.clone());
//!
//! let edit = cache.materialize(templates.lookup("EditContent"), "BlogPost")?;
//! assert_eq!(edit.name(), "Edit_BlogPost");
//! assert!(edit.is_implied_by("EditContent"));
//! # Ok::<(), content_type_permissions::core::PermissionError>(())
//! ```

mod cache;
mod catalog;
mod content_type;
mod permission;
mod registry;
mod template;

pub use cache::{CacheKey, CacheMap, DynamicPermissionCache};
pub use catalog::GlobalPermission;
pub use content_type::ContentTypeDefinition;
pub use permission::Permission;
pub use registry::PermissionTemplates;
pub use template::{ImpliedBy, Pattern, PermissionTemplate, TemplateId};
