//! Asset catalog manifest (`Contents.json`).
//!
//! The manifest is a fixed document supplied by a `ManifestProvider`; the
//! pipeline writes it verbatim and never inspects it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};

/// Name of the manifest file inside the output directory.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// Supplies the manifest document written next to the icons.
pub trait ManifestProvider {
    /// The complete manifest contents.
    fn contents(&self) -> &str;
}

/// Xcode `AppIcon.appiconset` manifest referencing the `_{size}.png` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct XcodeAppIcon;

impl ManifestProvider for XcodeAppIcon {
    fn contents(&self) -> &str {
        XCODE_CONTENTS_JSON
    }
}

/// A manifest held in memory, for custom templates.
#[derive(Debug, Clone)]
pub struct StaticManifest(pub String);

impl ManifestProvider for StaticManifest {
    fn contents(&self) -> &str {
        &self.0
    }
}

/// Write the provider's manifest into `dir`.
pub fn write_manifest(dir: &Path, provider: &dyn ManifestProvider) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_FILENAME);
    fs::write(&path, provider.contents()).map_err(|source| IconError::ManifestWriteFailure {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

const XCODE_CONTENTS_JSON: &str = r#"{
  "images" : [
    {
      "filename" : "_40.png",
      "idiom" : "iphone",
      "scale" : "2x",
      "size" : "20x20"
    },
    {
      "filename" : "_60.png",
      "idiom" : "iphone",
      "scale" : "3x",
      "size" : "20x20"
    },
    {
      "filename" : "_58.png",
      "idiom" : "iphone",
      "scale" : "2x",
      "size" : "29x29"
    },
    {
      "filename" : "_87.png",
      "idiom" : "iphone",
      "scale" : "3x",
      "size" : "29x29"
    },
    {
      "filename" : "_80.png",
      "idiom" : "iphone",
      "scale" : "2x",
      "size" : "40x40"
    },
    {
      "filename" : "_120.png",
      "idiom" : "iphone",
      "scale" : "3x",
      "size" : "40x40"
    },
    {
      "filename" : "_120.png",
      "idiom" : "iphone",
      "scale" : "2x",
      "size" : "60x60"
    },
    {
      "filename" : "_180.png",
      "idiom" : "iphone",
      "scale" : "3x",
      "size" : "60x60"
    },
    {
      "filename" : "_20.png",
      "idiom" : "ipad",
      "scale" : "1x",
      "size" : "20x20"
    },
    {
      "filename" : "_40.png",
      "idiom" : "ipad",
      "scale" : "2x",
      "size" : "20x20"
    },
    {
      "filename" : "_29.png",
      "idiom" : "ipad",
      "scale" : "1x",
      "size" : "29x29"
    },
    {
      "filename" : "_58.png",
      "idiom" : "ipad",
      "scale" : "2x",
      "size" : "29x29"
    },
    {
      "filename" : "_40.png",
      "idiom" : "ipad",
      "scale" : "1x",
      "size" : "40x40"
    },
    {
      "filename" : "_80.png",
      "idiom" : "ipad",
      "scale" : "2x",
      "size" : "40x40"
    },
    {
      "filename" : "_76.png",
      "idiom" : "ipad",
      "scale" : "1x",
      "size" : "76x76"
    },
    {
      "filename" : "_152.png",
      "idiom" : "ipad",
      "scale" : "2x",
      "size" : "76x76"
    },
    {
      "filename" : "_167.png",
      "idiom" : "ipad",
      "scale" : "2x",
      "size" : "83.5x83.5"
    },
    {
      "filename" : "_1024.png",
      "idiom" : "ios-marketing",
      "scale" : "1x",
      "size" : "1024x1024"
    }
  ],
  "info" : {
    "author" : "xcode",
    "version" : 1
  }
}
"#;
