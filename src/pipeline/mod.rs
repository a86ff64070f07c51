//! The icon generation pipeline.
//!
//! Validate → resolve output → normalize → resize each size → write manifest.
//! Individual icon failures are recorded and skipped; a manifest failure
//! aborts the run because Xcode cannot use the set without it.

mod output_dir;
mod sink;

pub use output_dir::{
    default_dir_name, ensure_output_dir, output_dir_for, unix_timestamp, DEFAULT_DIR_PREFIX,
};
pub use sink::{IconSink, PngFileSink};

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::Result;
use crate::manifest::{write_manifest, ManifestProvider, XcodeAppIcon};
use crate::output::{display_path, Printer};
use crate::render::{normalize, resize_icon};
use crate::types::{GenerationReport, CANONICAL_SIZE, ICON_SIZES};
use crate::validation::{print_advisories, validate_source, SizeVerdict};

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Explicit output directory; a timestamped one is used when absent.
    pub output: Option<PathBuf>,
    /// Allow shrinking sources larger than the canonical size.
    pub auto_scale: bool,
    /// Prefix for the timestamped default directory.
    pub dir_prefix: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            output: None,
            auto_scale: false,
            dir_prefix: DEFAULT_DIR_PREFIX.to_string(),
        }
    }
}

/// Generates an icon set from a single source image.
pub struct IconPipeline {
    options: PipelineOptions,
    manifest: Box<dyn ManifestProvider>,
    sink: Box<dyn IconSink>,
    clock: fn() -> u64,
}

impl IconPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            options,
            manifest: Box::new(XcodeAppIcon),
            sink: Box::new(PngFileSink),
            clock: unix_timestamp,
        }
    }

    /// Replace the manifest template.
    pub fn with_manifest(mut self, manifest: impl ManifestProvider + 'static) -> Self {
        self.manifest = Box::new(manifest);
        self
    }

    /// Replace where icons are written.
    pub fn with_sink(mut self, sink: impl IconSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the clock used to name default output directories.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    /// Run the whole pipeline against `source`.
    pub fn run(&self, source: &Path, printer: &Printer) -> Result<GenerationReport> {
        let source = absolute(source)?;
        let validated = validate_source(&source, self.options.auto_scale)?;
        print_advisories(&validated.advisories, printer);

        if validated.verdict == SizeVerdict::Downscale {
            printer.info(
                "Scaling",
                &format!(
                    "{}x{} will be downscaled to {c}x{c}",
                    validated.source.width,
                    validated.source.height,
                    c = CANONICAL_SIZE
                ),
            );
        }

        let output_dir = output_dir_for(
            self.options.output.as_deref(),
            &source,
            &self.options.dir_prefix,
            (self.clock)(),
        )?;
        ensure_output_dir(&output_dir)?;
        printer.info("Output", &display_path(&output_dir));

        let normalized = normalize(&validated.source, self.options.auto_scale)?;
        drop(validated);

        let report = self.generate_icons(&normalized, &output_dir, printer)?;

        let manifest_path = write_manifest(&output_dir, self.manifest.as_ref())?;
        tracing::debug!(path = %manifest_path.display(), "wrote manifest");

        Ok(report)
    }

    /// Resize and write every icon size into `output_dir`.
    ///
    /// A failed write is logged and recorded in the report; the remaining
    /// sizes are still attempted.
    pub fn generate_icons(
        &self,
        normalized: &RgbaImage,
        output_dir: &Path,
        printer: &Printer,
    ) -> Result<GenerationReport> {
        let mut report = GenerationReport::new(output_dir, ICON_SIZES.len());

        for size in ICON_SIZES {
            let path = output_dir.join(size.filename);
            let icon = resize_icon(normalized, size)?;

            match self.sink.write(&path, &icon) {
                Ok(()) => {
                    tracing::debug!(file = size.filename, edge = size.edge, "generated icon");
                    report.record_success();
                }
                Err(e) => {
                    tracing::error!(file = size.filename, error = %e, "failed to generate icon");
                    printer.error("Failed", &format!("{} icon: {}", size, e));
                    report.record_failure(size, e.to_string());
                }
            }
        }

        Ok(report)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use image::Rgba;
    use tempfile::tempdir;

    struct FailAt(&'static str);

    impl IconSink for FailAt {
        fn write(&self, path: &Path, icon: &RgbaImage) -> Result<()> {
            if path.file_name().and_then(|n| n.to_str()) == Some(self.0) {
                return Err(IconError::IconWriteFailure {
                    path: path.to_path_buf(),
                    message: "simulated write error".to_string(),
                });
            }
            PngFileSink.write(path, icon)
        }
    }

    fn canonical() -> RgbaImage {
        RgbaImage::from_pixel(CANONICAL_SIZE, CANONICAL_SIZE, Rgba([40, 80, 120, 255]))
    }

    #[test]
    fn test_generate_icons_writes_every_size() {
        let dir = tempdir().unwrap();
        let pipeline = IconPipeline::new(PipelineOptions::default());

        let report = pipeline
            .generate_icons(&canonical(), dir.path(), &Printer::new())
            .unwrap();

        assert!(report.is_complete());
        for size in ICON_SIZES {
            let img = image::open(dir.path().join(size.filename)).unwrap();
            assert_eq!((img.width(), img.height()), (size.edge, size.edge));
        }
    }

    #[test]
    fn test_generate_icons_continues_past_failure() {
        let dir = tempdir().unwrap();
        let pipeline = IconPipeline::new(PipelineOptions::default()).with_sink(FailAt("_60.png"));

        let report = pipeline
            .generate_icons(&canonical(), dir.path(), &Printer::new())
            .unwrap();

        assert_eq!(report.success_count(), 12);
        assert_eq!(report.total, 13);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].edge, 60);
        assert!(!dir.path().join("_60.png").exists());
        assert!(dir.path().join("_76.png").exists());
        assert!(dir.path().join("_1024.png").exists());
    }

    #[test]
    fn test_generate_icons_invariant_propagates() {
        let dir = tempdir().unwrap();
        let pipeline = IconPipeline::new(PipelineOptions::default());
        let tiny = RgbaImage::new(100, 100);

        let err = pipeline
            .generate_icons(&tiny, dir.path(), &Printer::new())
            .unwrap_err();
        assert!(matches!(err, IconError::InvariantViolation { .. }));
    }

    #[test]
    fn test_default_options() {
        let options = PipelineOptions::default();
        assert!(options.output.is_none());
        assert!(!options.auto_scale);
        assert_eq!(options.dir_prefix, "AppIcon.appiconset");
    }
}
