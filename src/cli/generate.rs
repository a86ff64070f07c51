//! Generate command implementation.
//!
//! Validates the source image, writes every icon size and the Contents.json
//! manifest, then prints a summary.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{IconPipeline, PipelineOptions, DEFAULT_DIR_PREFIX};
use crate::types::GenerationReport;

// Flattened into `Cli`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the source image (1024x1024 PNG with transparency preferred)
    pub input: Option<PathBuf>,

    /// Custom output directory
    #[arg(long, short, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Downscale images larger than 1024x1024 (upscaling is not supported)
    #[arg(long, short)]
    pub auto_scale: bool,
}

impl GenerateArgs {
    /// Merge flags with config file settings; flags win.
    pub fn options(&self, settings: &Settings) -> PipelineOptions {
        PipelineOptions {
            output: self.output.clone().or_else(|| settings.output.clone()),
            auto_scale: self.auto_scale || settings.auto_scale,
            dir_prefix: settings
                .dir_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_DIR_PREFIX.to_string()),
        }
    }
}

pub fn run(input: &Path, options: PipelineOptions, printer: &Printer) -> Result<GenerationReport> {
    printer.status("Generating", &format!("icons from {}", display_path(input)));

    let report = IconPipeline::new(options).run(input, printer)?;
    print_summary(&report, printer);

    Ok(report)
}

fn print_summary(report: &GenerationReport, printer: &Printer) {
    let counts = format!("{}/{} icons", report.generated, report.total);

    if report.is_complete() {
        printer.status("Finished", &format!("generated {} and Contents.json", counts));
    } else {
        printer.warning(
            "Finished",
            &format!(
                "generated {} and Contents.json ({})",
                counts,
                plural(report.failures.len(), "failure", "failures")
            ),
        );
    }

    let location = display_path(&report.output_dir);
    printer.info("Location", &printer.cyan(&location));

    let name = report
        .output_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(location);
    printer.info(
        "Next",
        &format!("drag the {} folder into Xcode", printer.bold(&format!("'{}'", name))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_options_flags_override_settings() {
        let args = GenerateArgs {
            input: None,
            output: Some(PathBuf::from("flag.appiconset")),
            auto_scale: false,
        };
        let settings = Settings {
            output: Some(PathBuf::from("config.appiconset")),
            auto_scale: true,
            verbose: false,
            dir_prefix: Some("Custom".to_string()),
        };

        let options = args.options(&settings);
        assert_eq!(options.output, Some(PathBuf::from("flag.appiconset")));
        assert!(options.auto_scale);
        assert_eq!(options.dir_prefix, "Custom");
    }

    #[test]
    fn test_options_defaults() {
        let args = GenerateArgs {
            input: None,
            output: None,
            auto_scale: false,
        };
        let options = args.options(&Settings::default());
        assert!(options.output.is_none());
        assert_eq!(options.dir_prefix, DEFAULT_DIR_PREFIX);
    }

    #[test]
    fn test_run_generates_icon_set() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("icon.png");
        RgbaImage::from_pixel(1024, 1024, Rgba([255, 0, 0, 255]))
            .save(&source)
            .unwrap();
        let output = dir.path().join("Out.appiconset");

        let options = PipelineOptions {
            output: Some(output.clone()),
            ..PipelineOptions::default()
        };
        let report = run(&source, options, &Printer::new()).unwrap();

        assert_eq!(report.success_count(), 13);
        assert!(output.join("Contents.json").exists());
        assert!(output.join("_1024.png").exists());
    }
}
