//! Individual source image checks.
//!
//! Each check either passes, returns the matching `IconError`, or yields an
//! advisory. `validate_source` runs them in order.

use std::path::Path;

use image::ImageReader;

use crate::error::{IconError, Result};
use crate::types::{SourceImage, CANONICAL_SIZE, SUPPORTED_EXTENSIONS};

use super::warning::Diagnostic;

/// What the size policy decided for a square source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVerdict {
    /// Already the canonical size.
    Exact,
    /// Larger than canonical; shrink before generating.
    Downscale,
}

/// The path must exist and be a regular file.
pub fn check_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(IconError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(IconError::InputNotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// The extension must be png, jpg or jpeg, in any case.
pub fn check_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        let extension = if ext.is_empty() {
            "(none)".to_string()
        } else {
            format!(".{}", ext)
        };
        Err(IconError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        })
    }
}

/// Decode the image, sniffing the format from its content.
pub fn decode(path: &Path) -> Result<SourceImage> {
    let decode_err = |message: String| IconError::DecodeFailure {
        path: path.to_path_buf(),
        message,
    };

    let image = ImageReader::open(path)
        .map_err(|e| decode_err(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?
        .decode()
        .map_err(|e| decode_err(e.to_string()))?;

    Ok(SourceImage::new(path, image))
}

pub fn check_square(width: u32, height: u32) -> Result<()> {
    if width != height {
        return Err(IconError::ImageNotSquare { width, height });
    }
    Ok(())
}

/// Apply the canonical size policy to a square edge length.
///
/// Smaller sources always fail; larger ones need `auto_scale`.
pub fn check_size_policy(edge: u32, auto_scale: bool) -> Result<SizeVerdict> {
    if edge < CANONICAL_SIZE {
        return Err(IconError::too_small(edge, edge));
    }
    if edge > CANONICAL_SIZE {
        if !auto_scale {
            return Err(IconError::too_large(edge, edge));
        }
        return Ok(SizeVerdict::Downscale);
    }
    Ok(SizeVerdict::Exact)
}

/// Icons without transparency are accepted, with a warning.
pub fn check_alpha(source: &SourceImage) -> Diagnostic {
    if source.has_alpha() {
        Diagnostic::info("appicon::validate::alpha", "Image has transparency channel")
    } else {
        Diagnostic::warning(
            "appicon::validate::no-alpha",
            format!(
                "Image doesn't have transparency ({}). iOS icons typically require transparent backgrounds.",
                source.color_mode
            ),
        )
        .with_help("Export the source as a PNG with an alpha channel")
    }
}
