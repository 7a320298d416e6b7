//! Verbose-gated logging setup for the CLI.

use tracing_subscriber::fmt;

/// Installs the global subscriber when verbose output is requested. Without
/// `verbose`, log events are discarded and only the regular CLI output is printed.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }

    let _ = fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
