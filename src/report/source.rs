//! Inspection sources
//!
//! The collaborator boundary of the pipeline: anything that can produce the
//! verbose report lines for an image path. The core never retries or
//! recovers; a source that cannot deliver surfaces [SourceError::Unavailable]
//! unchanged.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Failure of an inspection source to produce a report.
#[derive(Debug)]
pub enum SourceError {
    /// The collaborator is missing, unreachable, or failed outright.
    Unavailable { reason: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable { reason } => {
                write!(f, "inspection source unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Something that can deliver the full report for an image path as lines.
pub trait InspectionSource {
    fn report(&self, path: &Path) -> Result<Vec<String>, SourceError>;
}

/// Runs ImageMagick's `identify -verbose` on the given image.
#[derive(Debug, Clone)]
pub struct IdentifyTool {
    program: String,
}

impl IdentifyTool {
    pub fn new() -> Self {
        Self::with_program("identify")
    }

    /// Use a differently-named or absolute-path binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check whether the program can be found on `PATH` (or, for a path
    /// containing a separator, directly).
    pub fn is_available(&self) -> bool {
        let candidate = Path::new(&self.program);
        if candidate.components().count() > 1 {
            return candidate.is_file();
        }
        env::var_os("PATH")
            .map(|paths| {
                env::split_paths(&paths).any(|dir| dir.join(&self.program).is_file())
            })
            .unwrap_or(false)
    }
}

impl Default for IdentifyTool {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionSource for IdentifyTool {
    fn report(&self, path: &Path) -> Result<Vec<String>, SourceError> {
        let output = Command::new(&self.program)
            .arg("-verbose")
            .arg(path)
            .output()
            .map_err(|e| SourceError::Unavailable {
                reason: format!("failed to run {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            return Err(SourceError::Unavailable {
                reason: format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        // identify output is not guaranteed to be UTF-8; lossy conversion
        // keeps the report parseable either way.
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok(text.lines().map(str::to_owned).collect())
    }
}

/// Reads a previously captured report from disk.
///
/// The offline path: `identify -verbose img > report.txt` once, convert many
/// times. Also the test seam for canned fixtures.
#[derive(Debug, Clone, Default)]
pub struct ReportFile;

impl InspectionSource for ReportFile {
    fn report(&self, path: &Path) -> Result<Vec<String>, SourceError> {
        let text = fs::read_to_string(path).map_err(|e| SourceError::Unavailable {
            reason: format!("failed to read report {}: {}", path.display(), e),
        })?;
        Ok(text.lines().map(str::to_owned).collect())
    }
}
