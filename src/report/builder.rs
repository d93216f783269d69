//! Tree builder
//!
//! Folds the flat line sequence back into a hierarchy. Nodes accumulate in
//! an arena indexed by id; the ancestor chain lives in a growth-checked
//! stack of ids keyed by indentation depth, so the finished tree never holds
//! a parent link. The builder owns the one stateful decision of the format:
//! after a field named `Histogram`, entries are matched against the
//! histogram grammar at a fixed depth until a line fails that grammar, which
//! ends histogram mode and re-submits the same line to the generic grammar.

use crate::report::lines::{parse_generic, parse_histogram};
use crate::report::tree::{Node, HISTOGRAM_ELEM};
use std::fmt;

/// Maximum nesting depth the ancestor stack will track.
pub const MAX_DEPTH: usize = 200;

/// Field name that switches the builder into histogram mode.
const HISTOGRAM_HEADER: &str = "Histogram";

/// Fatal structural defects in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A field's indentation implies a parent depth with no live ancestor.
    MalformedHierarchy { line: usize, depth: usize },
    /// A field's indentation exceeds the bounded ancestor stack.
    DepthOverflow { line: usize, depth: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedHierarchy { line, depth } => write!(
                f,
                "line {}: field at depth {} has no ancestor at depth {}",
                line,
                depth,
                depth - 1
            ),
            ParseError::DepthOverflow { line, depth } => write!(
                f,
                "line {}: indentation depth {} exceeds the maximum of {}",
                line, depth, MAX_DEPTH
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Node record during construction; children are arena ids.
#[derive(Debug, Default)]
struct ArenaNode {
    name: String,
    value: String,
    attributes: Vec<(String, String)>,
    children: Vec<usize>,
}

impl ArenaNode {
    fn field(name: String, value: String) -> Self {
        Self {
            name,
            value,
            ..Self::default()
        }
    }

    fn histogram(attributes: Vec<(String, String)>) -> Self {
        Self {
            name: HISTOGRAM_ELEM.to_string(),
            attributes,
            ..Self::default()
        }
    }
}

/// Parse the full line sequence into a tree rooted at a synthetic
/// empty-name node.
///
/// Lines matching neither grammar are skipped; structural defects
/// (impossible depth jumps, indentation beyond [MAX_DEPTH]) fail the whole
/// parse.
pub fn build_tree<I, S>(lines: I) -> Result<Node, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut arena: Vec<ArenaNode> = vec![ArenaNode::default()];
    // stack[d] = arena id of the live ancestor at depth d; the root occupies
    // depth 0. Placing a node truncates everything deeper, so stale entries
    // from an abandoned subtree can never be reattached to.
    let mut stack: Vec<usize> = vec![0];
    let mut histogram_depth: Option<usize> = None;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_no = index + 1;

        let mut produced: Option<(usize, ArenaNode)> = None;

        if let Some(depth) = histogram_depth {
            match parse_histogram(line) {
                Some(entry) => produced = Some((depth, ArenaNode::histogram(entry.attributes))),
                // Histogram mode ends; the same line is re-tried below.
                None => histogram_depth = None,
            }
        }

        if produced.is_none() && histogram_depth.is_none() {
            if let Some(field) = parse_generic(line) {
                if field.name == HISTOGRAM_HEADER {
                    histogram_depth = Some(field.depth + 1);
                }
                produced = Some((field.depth, ArenaNode::field(field.name, field.value)));
            }
        }

        let Some((depth, data)) = produced else {
            continue;
        };

        if depth >= MAX_DEPTH {
            return Err(ParseError::DepthOverflow {
                line: line_no,
                depth,
            });
        }
        if depth > stack.len() {
            return Err(ParseError::MalformedHierarchy {
                line: line_no,
                depth,
            });
        }

        let id = arena.len();
        arena.push(data);
        let parent = stack[depth - 1];
        arena[parent].children.push(id);
        stack.truncate(depth);
        stack.push(id);
    }

    Ok(materialize(&mut arena, 0))
}

/// Move the arena records into an owned recursive tree.
fn materialize(arena: &mut Vec<ArenaNode>, id: usize) -> Node {
    let data = std::mem::take(&mut arena[id]);
    let mut node = Node::with_attributes(data.name, data.value, data.attributes);
    node.children.reserve(data.children.len());
    for child_id in data.children {
        node.children.push(materialize(arena, child_id));
    }
    node
}
