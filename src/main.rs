use std::process::ExitCode;

use appicon::cli::Cli;
use appicon::error::EXIT_CANCELLED;
use appicon::output::Printer;
use appicon::IconError;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let printer = Printer::new();
    install_interrupt_handler(&printer);

    match appicon::cli::run(cli, &printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(IconError::Cancelled) => {
            report_cancelled(&printer);
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}

/// Ctrl-C aborts immediately with 130. Icons already written stay on disk.
fn install_interrupt_handler(printer: &Printer) {
    let handler_printer = printer.clone();
    let installed = ctrlc::set_handler(move || {
        tracing::info!("exiting due to interrupt");
        report_cancelled(&handler_printer);
        std::process::exit(i32::from(EXIT_CANCELLED));
    });

    if let Err(e) = installed {
        printer.warning("Warning", &format!("could not install Ctrl-C handler: {}", e));
    }
}

fn report_cancelled(printer: &Printer) {
    printer.info("Cancelled", &IconError::Cancelled.to_string());
}
