//! Property-based tests for the prefix-grouping transform
//!
//! Generated trees mix plain names with `prefix:name` fields at every
//! level; grouping must be idempotent and must never change the number of
//! leaves, only their ancestry.

use identree::report::{group_tree, Node};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z0-9]{0,7}",
        ("[a-z]{1,4}", "[A-Za-z][A-Za-z0-9]{0,5}")
            .prop_map(|(prefix, rest)| format!("{}:{}", prefix, rest)),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = (arb_name(), "[a-z0-9 ]{0,12}").prop_map(|(name, value)| Node::new(name, value));
    leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_name(), prop::collection::vec(inner, 0..4)).prop_map(|(name, children)| {
            let mut node = Node::new(name, "");
            node.children = children;
            node
        })
    })
}

proptest! {
    #[test]
    fn grouping_is_idempotent(node in arb_node()) {
        let mut root = Node::root();
        root.children.push(node);

        let once = group_tree(root);
        let twice = group_tree(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn grouping_preserves_leaf_count(node in arb_node()) {
        let mut root = Node::root();
        root.children.push(node);

        let before = root.leaf_count();
        let grouped = group_tree(root);
        prop_assert_eq!(grouped.leaf_count(), before);
    }

    #[test]
    fn grouped_names_no_longer_split(node in arb_node()) {
        fn assert_split_free(node: &Node) {
            for child in &node.children {
                // after grouping, a remaining colon could only come from a
                // name whose remainder was empty, and those are dropped
                assert!(!child.name.contains(':'), "unsplit name: {}", child.name);
                assert_split_free(child);
            }
        }

        let mut root = Node::root();
        root.children.push(node);
        assert_split_free(&group_tree(root));
    }
}
