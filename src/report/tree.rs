//! Report tree data model
//!
//! One node type covers the whole report: interior nodes carry children,
//! value leaves carry a string payload, and histogram leaves additionally
//! carry the pixel-count/color attributes captured by the histogram grammar.
//! The tree is exclusively owned top-down; there are no parent links.

use serde::Serialize;
use std::fmt;

/// Reserved name for leaves produced by the histogram sub-grammar.
pub const HISTOGRAM_ELEM: &str = "HistogramLevel";

/// One entry in the parsed report tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Field label; empty only on the synthetic root.
    pub name: String,
    /// String payload; empty for interior and group nodes.
    pub value: String,
    /// Child nodes in order of first appearance in the source text.
    pub children: Vec<Node>,
    /// Histogram capture attributes in capture order; empty otherwise.
    pub attributes: Vec<(String, String)>,
}

/// The closed set of shapes an encoder has to distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// No children, no attributes: encodes as a plain `name -> value` entry.
    ScalarLeaf,
    /// No children but histogram attributes: encodes as an object.
    AttributedLeaf,
    /// Has children; `unique_names` decides mapping vs. sequence encoding.
    Interior { unique_names: bool },
}

impl Node {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// The synthetic root sitting one level above the described image.
    pub fn root() -> Self {
        Self::new("", "")
    }

    pub fn with_attributes(
        name: impl Into<String>,
        value: impl Into<String>,
        attributes: Vec<(String, String)>,
    ) -> Self {
        Self {
            attributes,
            ..Self::new(name, value)
        }
    }

    /// A leaf is any node without children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Histogram leaves are recognized by their reserved name.
    pub fn is_histogram(&self) -> bool {
        self.name == HISTOGRAM_ELEM
    }

    pub fn shape(&self) -> NodeShape {
        if !self.children.is_empty() {
            let mut seen = std::collections::HashSet::new();
            let unique_names = self.children.iter().all(|c| seen.insert(c.name.as_str()));
            NodeShape::Interior { unique_names }
        } else if !self.attributes.is_empty() {
            NodeShape::AttributedLeaf
        } else {
            NodeShape::ScalarLeaf
        }
    }

    /// Number of nodes in this subtree, excluding `self`.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Number of leaves (childless nodes) in this subtree.
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(Node::leaf_count).sum()
        }
    }

    /// Render the children of this node as an indented `name: value` outline.
    ///
    /// Used for the `raw` output type; the synthetic root itself carries no
    /// field and is not printed.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.outline_into(0, &mut out);
        }
        out
    }

    fn outline_into(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.name);
        out.push(':');
        if !self.value.is_empty() {
            out.push(' ');
            out.push_str(&self.value);
        }
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out.push('\n');
        for child in &self.children {
            child.outline_into(depth + 1, out);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node('{}', {} children)",
            self.name,
            self.children.len()
        )
    }
}
