//! High-level pipeline API
//!
//! Ties the stages together: an [InspectionSource] delivers lines,
//! [parse_report] builds and groups the tree, and [render] picks one of the
//! output encodings. [ReportPipeline] is the one-call convenience used by
//! the CLI.

use crate::report::builder::{build_tree, ParseError};
use crate::report::formats::{encode_compact, encode_properties, encode_tags};
use crate::report::grouping::group_tree;
use crate::report::source::{InspectionSource, SourceError};
use crate::report::tree::Node;
use std::fmt;
use std::path::Path;

/// Parse report lines into the final grouped tree.
pub fn parse_report<I, S>(lines: I) -> Result<Node, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(group_tree(build_tree(lines)?))
}

/// The supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact nested-object encoding.
    Json,
    /// Markup-tag encoding.
    Xml,
    /// Flattened `%path=value` property list.
    Properties,
    /// Indented `name: value` outline of the grouped tree.
    Raw,
}

impl OutputFormat {
    /// Look up a format by its CLI name (`json`, `xml`, `irods`, `raw`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "xml" => Some(OutputFormat::Xml),
            "irods" => Some(OutputFormat::Properties),
            "raw" => Some(OutputFormat::Raw),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
            OutputFormat::Properties => "irods",
            OutputFormat::Raw => "raw",
        }
    }
}

/// Render an already-grouped tree in the requested encoding.
pub fn render(tree: &Node, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => encode_compact(tree),
        OutputFormat::Xml => encode_tags(tree),
        OutputFormat::Properties => encode_properties(tree),
        OutputFormat::Raw => tree.outline(),
    }
}

/// Errors that can occur while running the full pipeline.
#[derive(Debug)]
pub enum ReportError {
    Source(SourceError),
    Parse(ParseError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Source(e) => write!(f, "{}", e),
            ReportError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<SourceError> for ReportError {
    fn from(err: SourceError) -> Self {
        ReportError::Source(err)
    }
}

impl From<ParseError> for ReportError {
    fn from(err: ParseError) -> Self {
        ReportError::Parse(err)
    }
}

/// Source-to-output convenience wrapper.
pub struct ReportPipeline<S> {
    source: S,
}

impl<S: InspectionSource> ReportPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Obtain the report for `path`, parse it, and render it.
    pub fn run(&self, path: &Path, format: OutputFormat) -> Result<String, ReportError> {
        let lines = self.source.report(path)?;
        let tree = parse_report(lines)?;
        Ok(render(&tree, format))
    }
}
