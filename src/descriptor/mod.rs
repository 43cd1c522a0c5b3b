//! Route descriptor subsystem.
//!
//! # Data Flow
//! ```text
//! Host application shell:
//!     route() / route_with() / index() / layout()
//!         → RouteDescriptor tree (immutable, strict tree)
//!     prefix() rewrites top-level mount paths (new values, shallow)
//!         → handed to the compiler subsystem
//! ```
//!
//! # Design Decisions
//! - Node kind is a tagged variant, not a struct of nullable flags
//! - The variant enum is private; builders are the only constructors
//! - Descriptors are plain values: build once, clone freely, never mutate

pub mod builders;
pub mod model;

pub use builders::{index, layout, prefix, route, route_with};
pub use model::RouteDescriptor;
