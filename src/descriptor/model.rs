//! Route descriptor model.
//!
//! # Responsibilities
//! - Represent one node of a declarative navigation tree
//! - Make malformed shapes (index node with children) unrepresentable
//! - Expose read-only accessors for the compiler and for host code
//!
//! # Design Decisions
//! - Three node kinds: index, layout, path-addressable route
//! - The component slot is an opaque handle; this crate never calls it
//! - Children are owned vectors, so a tree is always a strict tree

/// One node of a declarative route tree.
///
/// `T` is the renderable component handle owned by the hosting
/// application. Descriptors store and clone it; they never inspect it.
/// Construction goes through the builder functions in
/// [`crate::descriptor::builders`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor<T> {
    pub(crate) kind: RouteKind<T>,
}

/// Node kind. Private so descriptors can only be obtained from the
/// builders, which keep every reachable shape well-formed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RouteKind<T> {
    /// Default child rendered when the parent path matches with no
    /// further sub-path. Carries no path and can take no children.
    Index { component: T },

    /// Path-less wrapper that renders its component around its children
    /// without contributing a path segment.
    Layout {
        component: T,
        children: Vec<RouteDescriptor<T>>,
    },

    /// Path-addressable node, optionally with nested children.
    Path {
        path: String,
        component: T,
        children: Vec<RouteDescriptor<T>>,
    },
}

impl<T> RouteDescriptor<T> {
    /// Path segment contributed by this node. Empty for index and
    /// layout nodes.
    pub fn path(&self) -> &str {
        match &self.kind {
            RouteKind::Path { path, .. } => path,
            RouteKind::Index { .. } | RouteKind::Layout { .. } => "",
        }
    }

    /// True only for nodes built with [`crate::descriptor::index`].
    pub fn is_index(&self) -> bool {
        matches!(self.kind, RouteKind::Index { .. })
    }

    /// The component handle this node renders.
    pub fn component(&self) -> &T {
        match &self.kind {
            RouteKind::Index { component }
            | RouteKind::Layout { component, .. }
            | RouteKind::Path { component, .. } => component,
        }
    }

    /// Child descriptors in declaration order. Empty for leaves.
    pub fn children(&self) -> &[RouteDescriptor<T>] {
        match &self.kind {
            RouteKind::Index { .. } => &[],
            RouteKind::Layout { children, .. } | RouteKind::Path { children, .. } => children,
        }
    }
}
