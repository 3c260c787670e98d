//! Diagnostic logging to stderr

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber. Stdout stays reserved for the facts.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: Logging unavailable ({})", e);
    }
}
