//! Flattened dotted-key property encoding
//!
//! The iRODS-style property list: one `%path=value` entry per value leaf,
//! where the path is the dot-joined sequence of normalized names from the
//! image node down. Histogram leaves are never emitted. The leading `%` of
//! the first entry is dropped, so the output reads
//!
//! ```text
//! Image.Geometry=512x512+0+0%Image.Properties.dcm.PatientID=12345
//! ```

use crate::report::formats::normalize_name;
use crate::report::tree::Node;

/// Render the tree as a `%`-separated property list.
pub fn encode_properties(root: &Node) -> String {
    let mut entries = Vec::new();
    if let Some(image) = root.children.first() {
        collect(image, "", &mut entries);
    }
    entries.join("%")
}

fn collect(node: &Node, parent: &str, entries: &mut Vec<String>) {
    let name = normalize_name(&node.name);
    let path = if parent.is_empty() {
        name
    } else {
        format!("{}.{}", parent, name)
    };

    if node.children.is_empty() {
        if !node.is_histogram() {
            entries.push(format!("{}={}", path, node.value));
        }
    } else {
        for child in &node.children {
            collect(child, &path, entries);
        }
    }
}
