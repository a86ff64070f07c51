//! Source normalization and resampling.
//!
//! Every icon is derived from a single RGBA8 image of the canonical size.
//! Shrinking uses Lanczos3 throughout to keep edges crisp without aliasing.

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{IconError, Result};
use crate::types::{IconSize, SourceImage, CANONICAL_SIZE};

/// Filter used for every resize.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Convert the source to RGBA8 at the canonical size.
///
/// Sources without alpha become fully opaque. Oversized sources are shrunk
/// when `auto_scale` is set. Growing an image is never allowed here; the
/// size policy rejects such sources earlier, so reaching that branch is an
/// invariant violation.
pub fn normalize(source: &SourceImage, auto_scale: bool) -> Result<RgbaImage> {
    let (width, height) = (source.width, source.height);

    if !source.is_square() {
        return Err(IconError::InvariantViolation {
            message: format!("normalizing a non-square image ({}x{})", width, height),
        });
    }

    if source.edge() < CANONICAL_SIZE {
        return Err(IconError::InvariantViolation {
            message: format!(
                "cannot upscale image from {}x{} to {}x{}",
                width, height, CANONICAL_SIZE, CANONICAL_SIZE
            ),
        });
    }

    if source.needs_downscale() && !auto_scale {
        return Err(IconError::InvariantViolation {
            message: format!(
                "{}x{} source reached normalization without auto-scale",
                width, height
            ),
        });
    }

    let rgba = source.image.to_rgba8();
    if !source.needs_downscale() {
        return Ok(rgba);
    }

    tracing::info!(
        path = %source.path.display(),
        from = width,
        to = CANONICAL_SIZE,
        "downscaling source to canonical size"
    );
    Ok(imageops::resize(
        &rgba,
        CANONICAL_SIZE,
        CANONICAL_SIZE,
        RESAMPLE_FILTER,
    ))
}

/// Produce the pixels for one icon size from the normalized image.
///
/// The canonical entry borrows the normalized image, so the 1024 icon is
/// exactly the normalized source and nothing is copied.
pub fn resize_icon<'a>(normalized: &'a RgbaImage, size: &IconSize) -> Result<Cow<'a, RgbaImage>> {
    let (width, height) = normalized.dimensions();

    if size.edge > width || size.edge > height {
        return Err(IconError::InvariantViolation {
            message: format!("cannot upscale {}x{} to {}", width, height, size),
        });
    }

    if (width, height) != (CANONICAL_SIZE, CANONICAL_SIZE) {
        return Err(IconError::InvariantViolation {
            message: format!(
                "resizing from {}x{} instead of the normalized {}x{} image",
                width, height, CANONICAL_SIZE, CANONICAL_SIZE
            ),
        });
    }

    if size.is_canonical() {
        return Ok(Cow::Borrowed(normalized));
    }

    Ok(Cow::Owned(imageops::resize(
        normalized,
        size.edge,
        size.edge,
        RESAMPLE_FILTER,
    )))
}
