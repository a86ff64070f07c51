//! Source image metadata.

use std::fmt;
use std::path::PathBuf;

use image::{ColorType, DynamicImage, GenericImageView};

use super::CANONICAL_SIZE;

/// Pixel layout of the decoded source, reduced to what matters for icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::LumaAlpha | ColorMode::Rgba)
    }
}

impl From<ColorType> for ColorMode {
    fn from(color: ColorType) -> Self {
        match (color.has_color(), color.has_alpha()) {
            (false, false) => ColorMode::Luma,
            (false, true) => ColorMode::LumaAlpha,
            (true, false) => ColorMode::Rgb,
            (true, true) => ColorMode::Rgba,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Luma => "L",
            ColorMode::LumaAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

/// A decoded source image and where it came from.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Absolute path of the source file.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub color_mode: ColorMode,
    /// Decoded pixels, held until generation finishes.
    pub image: DynamicImage,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            width,
            height,
            color_mode: image.color().into(),
            image,
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.color_mode.has_alpha()
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Edge length; only meaningful once the image is known to be square.
    pub fn edge(&self) -> u32 {
        self.width
    }

    /// True when the source must be shrunk to the canonical size first.
    pub fn needs_downscale(&self) -> bool {
        self.edge() > CANONICAL_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage, RgbaImage};

    #[test]
    fn test_color_mode_from_rgb() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let source = SourceImage::new("icon.jpg", img);
        assert_eq!(source.color_mode, ColorMode::Rgb);
        assert!(!source.has_alpha());
    }

    #[test]
    fn test_color_mode_from_rgba() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        let source = SourceImage::new("icon.png", img);
        assert_eq!(source.color_mode, ColorMode::Rgba);
        assert!(source.has_alpha());
    }

    #[test]
    fn test_color_mode_luma() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(2, 2));
        assert_eq!(ColorMode::from(img.color()), ColorMode::Luma);
        assert_eq!(ColorMode::Luma.to_string(), "L");
    }

    #[test]
    fn test_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(8, 6));
        let source = SourceImage::new("wide.png", img);
        assert_eq!((source.width, source.height), (8, 6));
        assert!(!source.is_square());
    }

    #[test]
    fn test_needs_downscale() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(CANONICAL_SIZE + 1, CANONICAL_SIZE + 1));
        assert!(SourceImage::new("big.png", img).needs_downscale());
    }
}
