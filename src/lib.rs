//! appicon - iOS/iPadOS app icon set generator
//!
//! A library for turning one 1024x1024 source image into every icon size an
//! Xcode `AppIcon.appiconset` needs, plus its `Contents.json` manifest.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod validation;

pub use config::Settings;
pub use error::{IconError, Result};
pub use manifest::{write_manifest, ManifestProvider, StaticManifest, XcodeAppIcon, MANIFEST_FILENAME};
pub use pipeline::{IconPipeline, IconSink, PipelineOptions, PngFileSink};
pub use render::{encode_png, normalize, resize_icon, write_png};
pub use types::{
    ColorMode, GenerationReport, IconSize, SizeFailure, SourceImage, CANONICAL_SIZE, ICON_SIZES,
};
pub use validation::{validate_source, SizeVerdict, ValidatedSource};
