//! Diagnostic logging setup.
//!
//! User-facing progress goes through `output::Printer`; `tracing` carries the
//! detailed log, which is off unless `--verbose` or `APPICON_LOG` is set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `appicon=trace`.
pub const LOG_ENV: &str = "APPICON_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "appicon=debug"
    } else {
        "off"
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "appicon=debug");
        assert_eq!(default_directive(false), "off");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
