//! Rendering module for appicon.
//!
//! This module turns a validated source into canonical RGBA pixels and
//! resizes and encodes the individual icon variants.

mod normalize;
mod png;

pub use normalize::{normalize, resize_icon, RESAMPLE_FILTER};
pub use png::{encode_png, write_png};
