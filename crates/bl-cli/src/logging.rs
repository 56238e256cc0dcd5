use std::io;

use tracing::Level;

/// Install the global subscriber.
///
/// Events go to stderr so that stdout carries only tool output.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
