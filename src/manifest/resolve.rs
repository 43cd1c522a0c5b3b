//! Component binding for manifest entries.
//!
//! # Responsibilities
//! - Map component names from a manifest to host-owned handles
//! - Turn validated entries into route descriptors via the builders
//!
//! # Design Decisions
//! - The registry stores and clones handles; it never inspects them
//! - Entry shape picks the builder: index flag, then path, then layout
//! - Resolution fails fast on the first unknown name (a wiring bug,
//!   unlike manifest validation which reports every data defect)

use std::collections::HashMap;

use thiserror::Error;

use crate::descriptor::builders::{index, layout, route_with};
use crate::descriptor::model::RouteDescriptor;
use crate::manifest::schema::ManifestEntry;

/// Error raised when a manifest names a component the host never
/// registered.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown component {name:?}")]
pub struct UnknownComponent {
    pub name: String,
}

/// Host-side table mapping component names to renderable handles.
#[derive(Debug, Clone)]
pub struct ComponentRegistry<T> {
    components: HashMap<String, T>,
}

impl<T> Default for ComponentRegistry<T> {
    fn default() -> Self {
        Self {
            components: HashMap::new(),
        }
    }
}

impl<T: Clone> ComponentRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under the name manifests refer to it by.
    /// Re-registering a name replaces the previous handle.
    pub fn register(&mut self, name: impl Into<String>, component: T) {
        self.components.insert(name.into(), component);
    }

    /// Look up a registered handle by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.components.get(name)
    }

    /// Bind every entry to its component and build the descriptor tree.
    ///
    /// Entries are expected to have passed [`crate::manifest::validate_manifest`];
    /// resolution itself only checks component names.
    pub fn resolve(
        &self,
        entries: &[ManifestEntry],
    ) -> Result<Vec<RouteDescriptor<T>>, UnknownComponent> {
        entries
            .iter()
            .map(|entry| self.resolve_entry(entry))
            .collect()
    }

    fn resolve_entry(&self, entry: &ManifestEntry) -> Result<RouteDescriptor<T>, UnknownComponent> {
        let component = self
            .components
            .get(&entry.component)
            .cloned()
            .ok_or_else(|| UnknownComponent {
                name: entry.component.clone(),
            })?;

        if entry.index {
            return Ok(index(component));
        }

        let children = self.resolve(&entry.children)?;
        Ok(match &entry.path {
            Some(path) => route_with(path.clone(), component, children),
            None => layout(component, children),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ComponentRegistry<&'static str> {
        let mut registry = ComponentRegistry::new();
        registry.register("TopPage", "<TopPage>");
        registry.register("AboutPage", "<AboutPage>");
        registry
    }

    fn entry(path: Option<&str>, component: &str, index: bool) -> ManifestEntry {
        ManifestEntry {
            path: path.map(str::to_string),
            component: component.to_string(),
            index,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_builds_descriptors() {
        let entries = vec![
            entry(None, "TopPage", true),
            entry(Some("about"), "AboutPage", false),
        ];

        let descriptors = registry().resolve(&entries).unwrap();
        assert!(descriptors[0].is_index());
        assert_eq!(*descriptors[0].component(), "<TopPage>");
        assert_eq!(descriptors[1].path(), "about");
    }

    #[test]
    fn test_pathless_entry_becomes_layout() {
        let entries = vec![ManifestEntry {
            path: None,
            component: "TopPage".to_string(),
            index: false,
            children: vec![entry(Some("about"), "AboutPage", false)],
        }];

        let descriptors = registry().resolve(&entries).unwrap();
        assert!(!descriptors[0].is_index());
        assert_eq!(descriptors[0].path(), "");
        assert_eq!(descriptors[0].children().len(), 1);
    }

    #[test]
    fn test_unknown_component_is_an_error() {
        let entries = vec![entry(Some("shop"), "ShopPage", false)];

        let err = registry().resolve(&entries).unwrap_err();
        assert_eq!(err.name, "ShopPage");
    }
}
