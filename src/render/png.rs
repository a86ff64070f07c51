//! PNG output for generated icons.
//!
//! Icons are encoded losslessly with the best zlib compression and adaptive
//! row filtering, the closest match to an optimizing PNG writer.

use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{IconError, Result};

/// Encode an RGBA image into PNG bytes.
pub fn encode_png(img: &RgbaImage) -> std::result::Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode and write an icon to a PNG file, replacing any existing file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(img).map_err(|e| IconError::IconWriteFailure {
        path: path.to_path_buf(),
        message: format!("Failed to encode PNG: {}", e),
    })?;

    fs::write(path, bytes).map_err(|e| IconError::IconWriteFailure {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
