//! Report parsing and conversion
//!
//! The pipeline runs in fixed stages over one exclusively-owned tree:
//!
//! ```text
//! raw lines -> build_tree -> group_tree -> encode_compact
//!                                       -> encode_tags
//!                                       -> encode_properties
//! ```
//!
//! - [lines] classifies a single line against the generic `name: value`
//!   grammar or the histogram-entry grammar.
//! - [builder] folds the full line sequence into a rooted ordered tree,
//!   tracking ancestors by indentation depth.
//! - [grouping] merges same-prefix sibling fields (`dcm:PatientID`,
//!   `dcm:StudyDate`) under one synthetic parent per prefix.
//! - [formats] holds the three encoders plus the shared tag-name
//!   normalization.
//! - [source] is the collaborator boundary: anything that can produce the
//!   report lines for an image path.
//! - [pipeline] ties the stages together behind a small high-level API.

pub mod builder;
pub mod formats;
pub mod grouping;
pub mod lines;
pub mod pipeline;
pub mod source;
pub mod tree;

pub use builder::{build_tree, ParseError, MAX_DEPTH};
pub use formats::{encode_compact, encode_properties, encode_tags, normalize_name};
pub use grouping::group_tree;
pub use pipeline::{parse_report, OutputFormat, ReportError, ReportPipeline};
pub use source::{IdentifyTool, InspectionSource, ReportFile, SourceError};
pub use tree::{Node, NodeShape, HISTOGRAM_ELEM};
