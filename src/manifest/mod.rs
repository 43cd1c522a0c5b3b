//! Route manifest subsystem.
//!
//! # Data Flow
//! ```text
//! manifest file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors reported)
//!     → resolve.rs (bind component names via ComponentRegistry)
//!     → Vec<RouteDescriptor> (same pipeline as code-built tables)
//! ```
//!
//! # Design Decisions
//! - Manifests are data: they name components, they never contain them
//! - Validation separates syntactic (serde) from semantic checks
//! - A manifest is optional; hosts can assemble descriptors in code

pub mod loader;
pub mod resolve;
pub mod schema;
pub mod validation;

pub use loader::{load_manifest, parse_manifest, ManifestError};
pub use resolve::{ComponentRegistry, UnknownComponent};
pub use schema::{Manifest, ManifestEntry};
pub use validation::{validate_manifest, ValidationError};
