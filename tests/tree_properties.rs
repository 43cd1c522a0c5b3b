//! Property-based coverage for the descriptor builders and the
//! compiler, over generated route trees.

use std::collections::HashSet;

use proptest::prelude::*;

use route_compiler::{
    compile, index, layout, prefix, route, route_with, CompiledRoute, RouteDescriptor,
};

fn path_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

fn descriptor() -> impl Strategy<Value = RouteDescriptor<u32>> {
    let leaf = prop_oneof![
        (path_segment(), any::<u32>()).prop_map(|(path, component)| route(path, component)),
        any::<u32>().prop_map(index),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (
                path_segment(),
                any::<u32>(),
                prop::collection::vec(inner.clone(), 1..4)
            )
                .prop_map(|(path, component, children)| route_with(path, component, children)),
            (any::<u32>(), prop::collection::vec(inner, 1..4))
                .prop_map(|(component, children)| layout(component, children)),
        ]
    })
}

fn table() -> impl Strategy<Value = Vec<RouteDescriptor<u32>>> {
    prop::collection::vec(descriptor(), 0..5)
}

fn assert_shape_matches(descriptors: &[RouteDescriptor<u32>], compiled: &[CompiledRoute<u32>]) {
    assert_eq!(descriptors.len(), compiled.len());
    for (descriptor, unit) in descriptors.iter().zip(compiled) {
        assert_eq!(descriptor.is_index(), unit.is_index);
        assert_eq!(descriptor.path(), unit.path.as_deref().unwrap_or(""));
        assert_eq!(*descriptor.component(), unit.component);
        assert_shape_matches(descriptor.children(), &unit.children);
    }
}

fn assert_sibling_keys_unique(units: &[CompiledRoute<u32>]) {
    let mut seen = HashSet::new();
    for unit in units {
        assert!(seen.insert(unit.key.clone()), "duplicate key {}", unit.key);
        assert_sibling_keys_unique(&unit.children);
    }
}

fn assert_index_units_terminal(units: &[CompiledRoute<u32>]) {
    for unit in units {
        if unit.is_index {
            assert!(unit.path.is_none());
            assert!(unit.children.is_empty());
        }
        assert_index_units_terminal(&unit.children);
    }
}

proptest! {
    #[test]
    fn compile_is_pure(table in table()) {
        prop_assert_eq!(compile(&table), compile(&table));
    }

    #[test]
    fn compiled_output_mirrors_input_shape(table in table()) {
        assert_shape_matches(&table, &compile(&table));
    }

    #[test]
    fn sibling_keys_never_collide(table in table()) {
        assert_sibling_keys_unique(&compile(&table));
    }

    #[test]
    fn index_units_are_terminal(table in table()) {
        assert_index_units_terminal(&compile(&table));
    }

    #[test]
    fn prefix_rewrites_without_mutating(table in table(), mount in path_segment()) {
        let before = table.clone();
        let mounted = prefix(&mount, &table);

        prop_assert_eq!(&table, &before);
        prop_assert_eq!(mounted.len(), table.len());
        for (original, moved) in table.iter().zip(&mounted) {
            if original.path().is_empty() {
                prop_assert_eq!(moved.path(), mount.as_str());
            } else {
                prop_assert_eq!(moved.path(), format!("{}/{}", mount, original.path()));
            }
        }
    }
}
