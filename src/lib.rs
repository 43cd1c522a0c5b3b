//! Declarative route-table compiler.
//!
//! Assembles a tree of route descriptors through a small set of builder
//! functions and compiles it, once at startup, into the nested route
//! units a client-side router runtime consumes. The crate never
//! navigates, matches URLs, or renders; components stay opaque handles.
//!
//! # Architecture Overview
//!
//! ```text
//! Host application shell:
//!     route() / index() / layout() / prefix()
//!         → RouteDescriptor tree (immutable)
//!             → compile() (depth-first walk, stable keys)
//!                 → CompiledRoute tree → consuming router runtime
//!
//! Data-authored tables:
//!     manifest file (TOML)
//!         → load_manifest() → validation → ComponentRegistry::resolve()
//!             → RouteDescriptor tree (same pipeline from here)
//! ```

pub mod compiler;
pub mod descriptor;
pub mod manifest;

pub use compiler::compile::{compile, CompiledRoute};
pub use compiler::key::RouteKey;
pub use descriptor::builders::{index, layout, prefix, route, route_with};
pub use descriptor::model::RouteDescriptor;
pub use manifest::loader::{load_manifest, parse_manifest, ManifestError};
pub use manifest::resolve::{ComponentRegistry, UnknownComponent};
pub use manifest::schema::{Manifest, ManifestEntry};
pub use manifest::validation::{validate_manifest, ValidationError};
