//! Builder functions for route descriptors.
//!
//! # Responsibilities
//! - Construct well-formed descriptors for each node kind
//! - Mount a group of routes under a shared path prefix
//!
//! # Design Decisions
//! - Builders are the only public constructors; no setters exist
//! - `prefix` is shallow: it rewrites the nodes it is given, never
//!   their children (a nested route keeps its own sub-path)
//! - `prefix` returns new descriptors and leaves its input untouched

use crate::descriptor::model::{RouteDescriptor, RouteKind};

/// Build a path-addressable leaf route.
///
/// `path` is a single segment such as `"about"`: non-empty, no leading
/// or trailing slash. Separators are inserted by [`prefix`] and by key
/// derivation, so a slash here would double up downstream.
pub fn route<T>(path: impl Into<String>, component: T) -> RouteDescriptor<T> {
    route_with(path, component, Vec::new())
}

/// Build a path-addressable route with nested children.
///
/// Child order is preserved through compilation; the consuming router
/// matches in order, first hit wins.
pub fn route_with<T>(
    path: impl Into<String>,
    component: T,
    children: Vec<RouteDescriptor<T>>,
) -> RouteDescriptor<T> {
    let path = path.into();
    debug_assert!(!path.is_empty(), "route path must be a non-empty segment");
    RouteDescriptor {
        kind: RouteKind::Path {
            path,
            component,
            children,
        },
    }
}

/// Build an index route: the default child rendered when the parent
/// path is matched with no further sub-path. Index nodes carry no path
/// and take no children.
pub fn index<T>(component: T) -> RouteDescriptor<T> {
    RouteDescriptor {
        kind: RouteKind::Index { component },
    }
}

/// Build a layout route: renders `component` around `children` without
/// contributing a path segment.
pub fn layout<T>(component: T, children: Vec<RouteDescriptor<T>>) -> RouteDescriptor<T> {
    RouteDescriptor {
        kind: RouteKind::Layout {
            component,
            children,
        },
    }
}

/// Mount a group of routes under `path_prefix`.
///
/// Top-level paths are rewritten to `"{path_prefix}/{path}"`; path-less
/// nodes (index and layout) are mounted at `path_prefix` itself and
/// become plain routes. The rewrite is shallow: nested children keep
/// their original sub-paths. Returns new descriptors; `routes` is
/// unchanged.
pub fn prefix<T: Clone>(path_prefix: &str, routes: &[RouteDescriptor<T>]) -> Vec<RouteDescriptor<T>> {
    routes
        .iter()
        .map(|descriptor| match &descriptor.kind {
            RouteKind::Path {
                path,
                component,
                children,
            } => RouteDescriptor {
                kind: RouteKind::Path {
                    path: format!("{path_prefix}/{path}"),
                    component: component.clone(),
                    children: children.clone(),
                },
            },
            RouteKind::Index { component } => RouteDescriptor {
                kind: RouteKind::Path {
                    path: path_prefix.to_string(),
                    component: component.clone(),
                    children: Vec::new(),
                },
            },
            RouteKind::Layout {
                component,
                children,
            } => RouteDescriptor {
                kind: RouteKind::Path {
                    path: path_prefix.to_string(),
                    component: component.clone(),
                    children: children.clone(),
                },
            },
        })
        .collect()
}
