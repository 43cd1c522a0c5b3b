//! Route manifest schema definitions.
//!
//! Route tables can be authored as TOML data and bound to components at
//! startup. All types derive Serde traits for deserialization from
//! manifest files; defaults keep minimal manifests valid.

use serde::{Deserialize, Serialize};

/// Root of a route manifest file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Manifest {
    /// Top-level route entries, in matching-priority order.
    pub routes: Vec<ManifestEntry>,
}

/// One route entry in a manifest.
///
/// Shape rules (checked by `validation`): index entries carry neither
/// path nor children; a present path is a non-empty segment with no
/// leading or trailing slash; an entry without a path and without
/// `index` is a layout wrapping its children.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManifestEntry {
    /// Path segment (absent for index and layout entries).
    #[serde(default)]
    pub path: Option<String>,

    /// Name of the component to render, resolved through a
    /// [`crate::manifest::ComponentRegistry`] at load time.
    pub component: String,

    /// Marks the default child of the parent entry.
    #[serde(default)]
    pub index: bool,

    /// Nested entries.
    #[serde(default)]
    pub children: Vec<ManifestEntry>,
}
