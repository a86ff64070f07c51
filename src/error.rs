use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::CANONICAL_SIZE;

/// Exit code for generic failures.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for a run the user cancelled (SIGINT convention).
pub const EXIT_CANCELLED: u8 = 130;

/// Main error type for appicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("Source image not found: {}", .path.display())]
    #[diagnostic(code(appicon::validate::not_found))]
    InputNotFound { path: PathBuf },

    #[error("Path is not a file: {}", .path.display())]
    #[diagnostic(code(appicon::validate::not_a_file))]
    InputNotAFile { path: PathBuf },

    #[error("Unsupported format: {extension}")]
    #[diagnostic(
        code(appicon::validate::unsupported_format),
        help("Supported formats: .png, .jpg, .jpeg")
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Image must be square. Current size: {width}x{height}")]
    #[diagnostic(code(appicon::validate::not_square))]
    ImageNotSquare { width: u32, height: u32 },

    #[error(
        "Image size is {width}x{height}, which is smaller than required {required}x{required}"
    )]
    #[diagnostic(
        code(appicon::validate::too_small),
        help("Upscaling produces blurry icons. Use a source image of at least 1024x1024.")
    )]
    ImageTooSmall { width: u32, height: u32, required: u32 },

    #[error("Image size is {width}x{height}, larger than required {required}x{required}")]
    #[diagnostic(
        code(appicon::validate::too_large),
        help("Use --auto-scale to downscale to 1024x1024")
    )]
    ImageTooLargeNoAutoScale { width: u32, height: u32, required: u32 },

    #[error("Failed to open image {}: {message}", .path.display())]
    #[diagnostic(code(appicon::decode))]
    DecodeFailure { path: PathBuf, message: String },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    #[diagnostic(code(appicon::io::output_dir))]
    OutputDirCreateFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {message}", .path.display())]
    #[diagnostic(code(appicon::io::icon))]
    IconWriteFailure { path: PathBuf, message: String },

    #[error("Failed to generate Contents.json at {}: {source}", .path.display())]
    #[diagnostic(
        code(appicon::io::manifest),
        help("Xcode cannot use the icon set without Contents.json")
    )]
    ManifestWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invariant violated: {message}")]
    #[diagnostic(code(appicon::invariant))]
    InvariantViolation { message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(appicon::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No input file provided")]
    #[diagnostic(code(appicon::input))]
    NoInput,

    #[error("Operation cancelled by user")]
    #[diagnostic(code(appicon::cancelled))]
    Cancelled,

    #[error("IO error: {0}")]
    #[diagnostic(code(appicon::io))]
    IoError(#[from] std::io::Error),
}

impl IconError {
    pub(crate) fn too_small(width: u32, height: u32) -> Self {
        IconError::ImageTooSmall {
            width,
            height,
            required: CANONICAL_SIZE,
        }
    }

    pub(crate) fn too_large(width: u32, height: u32) -> Self {
        IconError::ImageTooLargeNoAutoScale {
            width,
            height,
            required: CANONICAL_SIZE,
        }
    }

    /// True for failures caused by the source image rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            IconError::InputNotFound { .. }
                | IconError::InputNotAFile { .. }
                | IconError::UnsupportedFormat { .. }
                | IconError::ImageNotSquare { .. }
                | IconError::ImageTooSmall { .. }
                | IconError::ImageTooLargeNoAutoScale { .. }
                | IconError::DecodeFailure { .. }
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            IconError::Cancelled => EXIT_CANCELLED,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_exit_code() {
        assert_eq!(IconError::Cancelled.exit_code(), 130);
    }

    #[test]
    fn test_failures_exit_with_one() {
        assert_eq!(IconError::too_small(512, 512).exit_code(), 1);
        assert_eq!(IconError::NoInput.exit_code(), 1);
        let err = IconError::InvariantViolation {
            message: "upscale".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_too_small_message_carries_dimensions() {
        let msg = IconError::too_small(512, 512).to_string();
        assert!(msg.contains("512x512"));
        assert!(msg.contains("1024x1024"));
    }

    #[test]
    fn test_invariant_is_not_validation() {
        let err = IconError::InvariantViolation {
            message: "upscale".to_string(),
        };
        assert!(!err.is_validation());
        assert!(IconError::ImageNotSquare { width: 2, height: 3 }.is_validation());
    }
}
