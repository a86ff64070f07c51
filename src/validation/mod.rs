//! Source image validation.
//!
//! Confirms the source exists, is a supported raster format, is square and
//! satisfies the canonical size policy. Nothing is written to disk here.

mod checks;
mod warning;

pub use checks::{
    check_alpha, check_extension, check_file, check_size_policy, check_square, decode,
    SizeVerdict,
};
pub use warning::{Diagnostic, Severity, ValidationResult};

use std::path::Path;

use crate::error::Result;
use crate::output::Printer;
use crate::types::SourceImage;

/// A source image that passed validation.
#[derive(Debug)]
pub struct ValidatedSource {
    pub source: SourceImage,
    pub verdict: SizeVerdict,
    pub advisories: ValidationResult,
}

/// Run all checks against the image at `path`.
pub fn validate_source(path: &Path, auto_scale: bool) -> Result<ValidatedSource> {
    check_file(path)?;
    check_extension(path)?;

    let source = decode(path)?;
    check_square(source.width, source.height)?;
    let verdict = check_size_policy(source.edge(), auto_scale)?;

    let mut advisories = ValidationResult::new();
    advisories.push(check_alpha(&source));

    tracing::debug!(
        path = %source.path.display(),
        width = source.width,
        height = source.height,
        mode = %source.color_mode,
        ?verdict,
        "validated source image"
    );

    Ok(ValidatedSource {
        source,
        verdict,
        advisories,
    })
}

/// Print warnings to stderr; info advisories go to the debug log.
pub fn print_advisories(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        match d.severity {
            Severity::Info => tracing::debug!(code = %d.code, "{}", d.message),
            Severity::Warning => {
                printer.warning("Warning", &d.message);
                if let Some(help) = &d.help {
                    printer.warning("", &printer.dim(&format!("help: {}", help)));
                }
            }
        }
    }
}
