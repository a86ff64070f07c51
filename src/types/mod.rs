//! Core domain types for appicon.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `IconSize` - One entry of the fixed icon size table
//! - `SourceImage` - Metadata of the decoded source image
//! - `GenerationReport` - Outcome of a generation pass

mod report;
mod sizes;
mod source;

pub use report::{GenerationReport, SizeFailure};
pub use sizes::{IconSize, CANONICAL_SIZE, ICON_SIZES, SUPPORTED_EXTENSIONS};
pub use source::{ColorMode, SourceImage};
