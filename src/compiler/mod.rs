//! Route tree compilation subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<RouteDescriptor> (from builders or manifest)
//!     → compile.rs (depth-first walk, declaration order)
//!     → key.rs (stable identity per emitted unit)
//!     → Vec<CompiledRoute> → consuming router runtime
//! ```
//!
//! # Design Decisions
//! - Compiled once at startup; matching stays in the consuming router
//! - Pure function: fresh output tree per call, no shared state
//! - Sibling order is a matching-priority contract and is never reordered

pub mod compile;
pub mod key;

pub use compile::{compile, CompiledRoute};
pub use key::RouteKey;
