//! Shell completions generation.

use clap_complete::Shell;

/// Write completions for `shell` to stdout.
pub fn print(shell: Shell) {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "appicon", &mut std::io::stdout());
}
