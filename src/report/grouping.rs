//! Prefix grouping transform
//!
//! Merges colon-prefixed sibling fields under one synthetic parent per
//! prefix, splitting at the first colon:
//!
//! ```text
//! <x>               <x>
//!   <p:a/>            <p>
//!   <p:b/>     =>       <a/>
//! </x>                  <b/>
//!                     </p>
//!                   </x>
//! ```
//!
//! Group parents are created in first-seen prefix order and appended after
//! the surviving children; fields without a prefix keep their original
//! sibling position. A split with an empty remainder drops the child
//! entirely. The transform is idempotent: after one pass no child name
//! splits any further.

use crate::report::tree::Node;
use once_cell::sync::Lazy;
use regex::Regex;

static GROUPED_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<prefix>.+?):(?P<rest>.*)$").unwrap());

/// Regroup prefixed siblings throughout the tree, in place.
pub fn group_tree(mut root: Node) -> Node {
    group_children(&mut root);
    root
}

fn group_children(x: &mut Node) {
    // First-seen prefix order; a Vec keyed by name keeps it without pulling
    // in an ordered map for a handful of prefixes per node.
    let mut groups: Vec<Node> = Vec::new();

    let mut i = 0;
    while i < x.children.len() {
        let split = GROUPED_ENTRY
            .captures(&x.children[i].name)
            .map(|caps| (caps["prefix"].to_string(), caps["rest"].to_string()));

        match split {
            None => i += 1,
            Some((_, rest)) if rest.is_empty() => {
                x.children.remove(i);
            }
            Some((prefix, rest)) => {
                let mut moved = x.children.remove(i);
                moved.name = rest;
                match groups.iter_mut().find(|g| g.name == prefix) {
                    Some(group) => group.children.push(moved),
                    None => {
                        let mut group = Node::new(prefix, "");
                        group.children.push(moved);
                        groups.push(group);
                    }
                }
            }
        }
    }

    x.children.append(&mut groups);

    // The appended groups are visited too: a name like `a:b:c` regroups
    // again one level down.
    for child in &mut x.children {
        group_children(child);
    }
}
