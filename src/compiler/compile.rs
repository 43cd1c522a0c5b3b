//! Route tree compilation.
//!
//! # Responsibilities
//! - Walk a descriptor tree depth-first in declaration order
//! - Emit the nested route units the consuming router expects
//! - Assign each emitted unit a stable key
//!
//! # Design Decisions
//! - Pure function: no validation, no errors, fresh output per call
//! - Index nodes terminate; layout nodes recurse without extending the
//!   path scope; path nodes extend the scope for their subtree
//! - Component handles are cloned through untouched

use serde::Serialize;

use crate::compiler::key::{join_paths, RouteKey};
use crate::descriptor::model::{RouteDescriptor, RouteKind};

/// One node of the compiled route tree.
///
/// This is the shape handed to the consuming router: path or index
/// marker, the component handle, and nested units in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledRoute<T> {
    /// Stable identity, unique within this unit's sibling list.
    pub key: RouteKey,

    /// Path segment, or `None` for path-less (index and layout) units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// True when this unit is the default match for its parent.
    pub is_index: bool,

    /// Opaque component handle threaded through from the descriptor.
    pub component: T,

    /// Nested units in declaration order; first match wins downstream.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CompiledRoute<T>>,
}

/// Compile a descriptor tree into the nested units a router consumes.
///
/// Sibling order is preserved exactly at every depth. Calling this twice
/// on the same tree yields structurally equal output.
pub fn compile<T: Clone>(routes: &[RouteDescriptor<T>]) -> Vec<CompiledRoute<T>> {
    tracing::debug!(top_level = routes.len(), "compiling route table");
    compile_level(routes, "")
}

fn compile_level<T: Clone>(
    routes: &[RouteDescriptor<T>],
    parent_path: &str,
) -> Vec<CompiledRoute<T>> {
    routes
        .iter()
        .enumerate()
        .map(|(position, descriptor)| compile_node(descriptor, parent_path, position))
        .collect()
}

fn compile_node<T: Clone>(
    descriptor: &RouteDescriptor<T>,
    parent_path: &str,
    position: usize,
) -> CompiledRoute<T> {
    match &descriptor.kind {
        RouteKind::Index { component } => CompiledRoute {
            key: RouteKey::derive(parent_path, "", position),
            path: None,
            is_index: true,
            component: component.clone(),
            children: Vec::new(),
        },
        RouteKind::Layout {
            component,
            children,
        } => CompiledRoute {
            key: RouteKey::derive(parent_path, "", position),
            path: None,
            is_index: false,
            component: component.clone(),
            // A layout contributes no path segment to its subtree.
            children: compile_level(children, parent_path),
        },
        RouteKind::Path {
            path,
            component,
            children,
        } => CompiledRoute {
            key: RouteKey::derive(parent_path, path, position),
            path: Some(path.clone()),
            is_index: false,
            component: component.clone(),
            children: compile_level(children, &join_paths(parent_path, path)),
        },
    }
}
