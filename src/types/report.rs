//! Outcome of a generation pass.

use std::path::PathBuf;

use serde::Serialize;

use super::IconSize;

/// One icon size that could not be produced.
#[derive(Debug, Clone, Serialize)]
pub struct SizeFailure {
    pub edge: u32,
    pub filename: &'static str,
    pub message: String,
}

/// Counts of generated icons against the size table.
///
/// Used for terminal reporting only; never written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub generated: usize,
    pub total: usize,
    pub failures: Vec<SizeFailure>,
    #[serde(skip)]
    pub output_dir: PathBuf,
}

impl GenerationReport {
    pub fn new(output_dir: impl Into<PathBuf>, total: usize) -> Self {
        Self {
            generated: 0,
            total,
            failures: Vec::new(),
            output_dir: output_dir.into(),
        }
    }

    pub fn record_success(&mut self) {
        self.generated += 1;
    }

    pub fn record_failure(&mut self, size: &IconSize, message: impl Into<String>) {
        self.failures.push(SizeFailure {
            edge: size.edge,
            filename: size.filename,
            message: message.into(),
        });
    }

    /// Number of icons written successfully.
    pub fn success_count(&self) -> usize {
        self.generated
    }

    /// True when every requested size was written.
    pub fn is_complete(&self) -> bool {
        self.generated == self.total && self.failures.is_empty()
    }
}
