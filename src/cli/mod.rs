pub mod completions;
pub mod generate;
pub mod prompt;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::Settings;
use crate::error::Result;
use crate::logging;
use crate::output::Printer;

/// appicon - Generate iOS/iPadOS app icons in all required sizes from a single image
#[derive(Parser, Debug)]
#[command(name = "appicon")]
#[command(version, about, long_about = None)]
#[command(after_help = "Example: appicon icon_1024.png -o MyAppIcon.appiconset")]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Print the generation report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Config file (default: ./appicon.yaml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Run the CLI: load config, set up logging, obtain a source and generate.
pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    if let Some(shell) = cli.completions {
        completions::print(shell);
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let settings = Settings::discover(cli.config.as_deref(), &cwd)?;
    logging::init(cli.verbose || settings.verbose);

    let input = match &cli.generate.input {
        Some(path) => path.clone(),
        None => prompt::prompt_for_path(&mut io::stdin().lock(), &mut io::stderr())?,
    };

    let options = cli.generate.options(&settings);
    let report = generate::run(&input, options, printer)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::from)?;
        println!("{}", json);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "appicon",
            "icon.png",
            "-o",
            "Out.appiconset",
            "-a",
            "-v",
            "--json",
        ]);
        assert_eq!(cli.generate.input, Some(PathBuf::from("icon.png")));
        assert_eq!(cli.generate.output, Some(PathBuf::from("Out.appiconset")));
        assert!(cli.generate.auto_scale);
        assert!(cli.verbose);
        assert!(cli.json);
    }

    #[test]
    fn test_input_is_optional() {
        let cli = Cli::parse_from(["appicon"]);
        assert!(cli.generate.input.is_none());
        assert!(!cli.generate.auto_scale);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["appicon", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
