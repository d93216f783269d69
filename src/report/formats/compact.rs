//! Compact nested-object encoding (JSON)
//!
//! Each node contributes one of three JSON shapes, decided by [NodeShape]:
//!
//! - scalar leaf: a plain `"name": "value"` entry
//! - attributed leaf: `"name": {"_value": "...", "count": "...", ...}`
//! - interior node: an object keyed by child name while all sibling names
//!   are distinct, otherwise an array of single-key objects so that no
//!   duplicate is silently discarded
//!
//! Mapping keys hold first-seen order (serde_json's `preserve_order`
//! feature). The emitted document is the payload of the synthetic root,
//! i.e. an object holding the described image under its field name.

use crate::report::tree::{Node, NodeShape};
use serde_json::{Map, Value};

/// Render the tree as an indented JSON document.
pub fn encode_compact(root: &Node) -> String {
    serde_json::to_string_pretty(&encode_value(root))
        .expect("serializing an in-memory JSON value cannot fail")
}

fn encode_value(node: &Node) -> Value {
    match node.shape() {
        NodeShape::ScalarLeaf => Value::String(node.value.clone()),
        NodeShape::AttributedLeaf => {
            let mut object = Map::new();
            object.insert("_value".to_string(), Value::String(node.value.clone()));
            for (key, value) in &node.attributes {
                object.insert(key.clone(), Value::String(value.clone()));
            }
            Value::Object(object)
        }
        NodeShape::Interior { unique_names: true } => {
            let mut object = Map::new();
            for child in &node.children {
                object.insert(child.name.clone(), encode_value(child));
            }
            Value::Object(object)
        }
        NodeShape::Interior {
            unique_names: false,
        } => Value::Array(
            node.children
                .iter()
                .map(|child| {
                    let mut object = Map::new();
                    object.insert(child.name.clone(), encode_value(child));
                    Value::Object(object)
                })
                .collect(),
        ),
    }
}
