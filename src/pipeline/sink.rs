//! Destinations for generated icons.

use std::path::Path;

use image::RgbaImage;

use crate::error::Result;
use crate::render::write_png;

/// Receives each generated icon.
pub trait IconSink {
    fn write(&self, path: &Path, icon: &RgbaImage) -> Result<()>;
}

/// Writes icons as optimized PNG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFileSink;

impl IconSink for PngFileSink {
    fn write(&self, path: &Path, icon: &RgbaImage) -> Result<()> {
        write_png(icon, path)
    }
}
