//! Stable identity derivation for compiled routes.
//!
//! # Responsibilities
//! - Assign each compiled route a deterministic identity
//! - Keep identities unique within every sibling list
//!
//! # Design Decisions
//! - Keys are a pure function of (parent scope, own path, sibling
//!   position); no module-level counter
//! - Sibling position disambiguates duplicate literal paths
//! - Parent scope disambiguates identical segments on different branches

use serde::Serialize;
use std::fmt;

/// Stable identity assigned to one compiled route.
///
/// Consuming routers use it to tell emitted units apart across
/// recompiles of the same table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteKey(String);

impl RouteKey {
    /// Derive the key for the node at `position` in its sibling list.
    /// `parent_path` is the scoped path accumulated down the recursion;
    /// `path` is empty for index and layout nodes.
    pub(crate) fn derive(parent_path: &str, path: &str, position: usize) -> Self {
        RouteKey(format!("{}-{}", join_paths(parent_path, path), position))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join two path fragments with a separator, skipping empty sides.
pub(crate) fn join_paths(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else if child.is_empty() {
        parent.to_string()
    } else {
        format!("{parent}/{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_at_root() {
        assert_eq!(RouteKey::derive("", "about", 0).as_str(), "about-0");
    }

    #[test]
    fn test_key_under_parent() {
        assert_eq!(
            RouteKey::derive("dashboard", "settings", 1).as_str(),
            "dashboard/settings-1"
        );
    }

    #[test]
    fn test_key_for_pathless_node() {
        assert_eq!(RouteKey::derive("dashboard", "", 0).as_str(), "dashboard-0");
        assert_eq!(RouteKey::derive("", "", 0).as_str(), "-0");
    }

    #[test]
    fn test_duplicate_siblings_get_distinct_keys() {
        let first = RouteKey::derive("", "x", 0);
        let second = RouteKey::derive("", "x", 1);
        assert_ne!(first, second);
    }
}
