//! # identree
//!
//! A parser and converter for the verbose report format emitted by
//! ImageMagick's `identify` tool.
//!
//! The report is an indentation-structured list of `name: value` fields with
//! one special sub-grammar for histogram entries. This crate reconstructs the
//! hierarchy as a tree, regroups colon-prefixed sibling fields (such as the
//! `dcm:` DICOM properties) under synthetic parents, and renders the result
//! as JSON, XML, or a flattened iRODS-style property list.
//!
//! ```text
//! Image: scan.dcm
//!   Geometry: 512x512+0+0
//!   Properties:
//!     dcm:PatientID: 12345
//! ```
//!
//! See the [report] module for the pipeline stages and the public API.

pub mod report;
