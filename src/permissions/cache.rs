//! Dynamic permission cache
//!
//! Materializes per-content-type permissions from templates. The cached path
//! keeps one published instance per (template, content type) pair; the rich
//! path builds fresh, categorized permissions for listing in admin screens.
//!
//! The cache map is copy-on-write: readers clone the current `Arc` snapshot,
//! writers build a new map and swap it in with a single assignment. Racing
//! misses on the same key may both build; the last write wins.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::catalog::GlobalPermission;
use super::content_type::ContentTypeDefinition;
use super::permission::Permission;
use super::registry::PermissionTemplates;
use super::template::{ImpliedBy, PermissionTemplate, TemplateId};
use crate::core::{PermissionError, PermissionResult, PermissionsConfig};

/// Cache key: template name pattern (e.g. `Edit_{0}`) and content type name
pub type CacheKey = (String, String);

/// A published cache snapshot
pub type CacheMap = HashMap<CacheKey, Arc<Permission>>;

/// Cache of materialized per-content-type permissions
///
/// Owned by the host's composition root and shared as
/// `Arc<DynamicPermissionCache>`.
#[derive(Debug)]
pub struct DynamicPermissionCache {
    templates: Arc<PermissionTemplates>,
    entries: RwLock<Arc<CacheMap>>,
}

impl DynamicPermissionCache {
    /// Create an empty cache over a template registry
    pub fn new(templates: Arc<PermissionTemplates>) -> Self {
        Self {
            templates,
            entries: RwLock::new(Arc::new(CacheMap::new())),
        }
    }

    /// Create a cache from configuration, warming it if requested
    pub fn from_config(
        templates: Arc<PermissionTemplates>,
        config: &PermissionsConfig,
    ) -> PermissionResult<Self> {
        config.validate()?;
        let cache = Self::new(templates);
        if config.warm_on_start {
            cache.warm(config);
        }
        Ok(cache)
    }

    /// The template registry this cache materializes from
    pub fn templates(&self) -> &Arc<PermissionTemplates> {
        &self.templates
    }

    /// Materialize a permission for a content type, reusing the cached instance
    ///
    /// Fails with `InvalidArgument` when `template` is `None`; the cache is
    /// left untouched in that case.
    pub fn materialize(
        &self,
        template: Option<&PermissionTemplate>,
        content_type: &str,
    ) -> PermissionResult<Arc<Permission>> {
        let Some(template) = template else {
            tracing::warn!("Cannot materialize permission for '{}': no template", content_type);
            return Err(PermissionError::InvalidArgument("template"));
        };
        Ok(self.materialize_cached(template, content_type))
    }

    /// Materialize by canonical permission name
    pub fn materialize_named(
        &self,
        name: &str,
        content_type: &str,
    ) -> PermissionResult<Arc<Permission>> {
        let template = self
            .templates
            .lookup(name)
            .ok_or_else(|| PermissionError::UnknownPermission(name.to_string()))?;
        Ok(self.materialize_cached(template, content_type))
    }

    /// Convert a global content permission into its per-type counterpart
    ///
    /// Returns `None` when the permission has no template, meaning it is not
    /// dynamic and applies as-is.
    pub fn resolve(&self, permission: &Permission, content_type: &str) -> Option<Arc<Permission>> {
        self.templates
            .template_for(permission)
            .map(|template| self.materialize_cached(template, content_type))
    }

    fn materialize_cached(&self, template: &PermissionTemplate, content_type: &str) -> Arc<Permission> {
        let key = (template.name().to_string(), content_type.to_string());

        if let Some(hit) = self.snapshot().get(&key) {
            tracing::debug!("Permission cache hit: {:?} for '{}'", template.id(), content_type);
            return hit.clone();
        }

        tracing::debug!("Permission cache miss: {:?} for '{}'", template.id(), content_type);

        let implied_by: Vec<Permission> = template
            .implied_by()
            .iter()
            .filter_map(|parent| match *parent {
                ImpliedBy::Template(id) => self
                    .templates
                    .get(id)
                    .map(|t| Permission::clone(&self.materialize_cached(t, content_type))),
                ImpliedBy::Global(global) => Some(global.permission()),
            })
            .collect();

        let permission = Arc::new(
            Permission::new(
                template.name().render(content_type),
                template.description().render(content_type),
            )
            .with_implied_by(implied_by),
        );

        self.publish(key, permission.clone());
        permission
    }

    fn publish(&self, key: CacheKey, permission: Arc<Permission>) {
        let mut current = self.entries.write().unwrap_or_else(|poisoned| {
            tracing::warn!("Recovering poisoned permission cache lock");
            PoisonError::into_inner(poisoned)
        });
        let mut next = CacheMap::clone(&current);
        next.insert(key, permission);
        *current = Arc::new(next);
    }

    /// Build a fresh, categorized permission for a content type definition
    ///
    /// Never reads or writes the cache. The name uses the type's technical
    /// name, the description its display name, and every permission in the
    /// implied-by tree gets the type's category.
    pub fn materialize_rich(
        &self,
        template: Option<&PermissionTemplate>,
        definition: &ContentTypeDefinition,
    ) -> PermissionResult<Permission> {
        let Some(template) = template else {
            tracing::warn!("Cannot materialize permission for '{}': no template", definition.name);
            return Err(PermissionError::InvalidArgument("template"));
        };
        Ok(self.rich(template, definition, &definition.category()))
    }

    fn rich(
        &self,
        template: &PermissionTemplate,
        definition: &ContentTypeDefinition,
        category: &str,
    ) -> Permission {
        let implied_by: Vec<Permission> = template
            .implied_by()
            .iter()
            .filter_map(|parent| match *parent {
                ImpliedBy::Template(id) => self
                    .templates
                    .get(id)
                    .map(|t| self.rich(t, definition, category)),
                ImpliedBy::Global(global) => Some(categorized_global(global, category)),
            })
            .collect();

        Permission::new(
            template.name().render(&definition.name),
            template.description().render(&definition.display_name),
        )
        .with_category(category)
        .with_implied_by(implied_by)
    }

    /// Every per-type permission for one content type, in template order
    pub fn permissions_for_type(&self, definition: &ContentTypeDefinition) -> Vec<Permission> {
        let category = definition.category();
        self.templates
            .iter()
            .map(|template| self.rich(template, definition, &category))
            .collect()
    }

    /// Per-type permissions for every securable content type
    pub fn permissions_for_types<'a>(
        &self,
        definitions: impl IntoIterator<Item = &'a ContentTypeDefinition>,
    ) -> Vec<Permission> {
        definitions
            .into_iter()
            .filter(|d| d.securable)
            .flat_map(|d| self.permissions_for_type(d))
            .collect()
    }

    /// Pre-materialize every template for each securable configured type
    pub fn warm(&self, config: &PermissionsConfig) {
        let mut warmed = 0;
        for definition in config.securable_types() {
            for template in self.templates.iter() {
                self.materialize_cached(template, &definition.name);
            }
            warmed += 1;
        }
        tracing::info!(
            "Warmed permission cache for {} content types ({} entries)",
            warmed,
            self.len()
        );
    }

    /// Look up a cached permission for a registry template without materializing it
    pub fn get(&self, id: TemplateId, content_type: &str) -> Option<Arc<Permission>> {
        let template = self.templates.get(id)?;
        self.get_for(template, content_type)
    }

    /// Look up a cached permission for any template without materializing it
    pub fn get_for(
        &self,
        template: &PermissionTemplate,
        content_type: &str,
    ) -> Option<Arc<Permission>> {
        self.snapshot()
            .get(&(template.name().to_string(), content_type.to_string()))
            .cloned()
    }

    /// The currently published map
    pub fn snapshot(&self) -> Arc<CacheMap> {
        match self.entries.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

fn categorized_global(global: GlobalPermission, category: &str) -> Permission {
    Permission::new(global.name(), global.description())
        .with_category(category)
        .with_implied_by(
            global
                .implied_by()
                .iter()
                .map(|parent| categorized_global(*parent, category)),
        )
}
