//! The fixed iOS/iPadOS icon size table.
//!
//! Every icon Xcode's `AppIcon` asset catalog expects is derived from one
//! 1024x1024 master. The table is ordered; generation follows this order.

use std::fmt;

/// Required edge length of the source image.
pub const CANONICAL_SIZE: u32 = 1024;

/// File extensions accepted as source images (lowercase, without the dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// One square icon variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSize {
    /// Edge length in pixels.
    pub edge: u32,
    /// Output filename inside the icon set.
    pub filename: &'static str,
}

impl IconSize {
    const fn new(edge: u32, filename: &'static str) -> Self {
        Self { edge, filename }
    }

    /// True for the entry that reuses the normalized source as-is.
    pub fn is_canonical(&self) -> bool {
        self.edge == CANONICAL_SIZE
    }

    /// Look up a table entry by edge length.
    pub fn find(edge: u32) -> Option<IconSize> {
        ICON_SIZES.iter().copied().find(|s| s.edge == edge)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.edge, self.edge)
    }
}

/// All icon sizes in generation order.
pub const ICON_SIZES: &[IconSize] = &[
    IconSize::new(20, "_20.png"),
    IconSize::new(29, "_29.png"),
    IconSize::new(40, "_40.png"),
    IconSize::new(58, "_58.png"),
    IconSize::new(60, "_60.png"),
    IconSize::new(76, "_76.png"),
    IconSize::new(80, "_80.png"),
    IconSize::new(87, "_87.png"),
    IconSize::new(120, "_120.png"),
    IconSize::new(152, "_152.png"),
    IconSize::new(167, "_167.png"),
    IconSize::new(180, "_180.png"),
    IconSize::new(CANONICAL_SIZE, "_1024.png"),
];
