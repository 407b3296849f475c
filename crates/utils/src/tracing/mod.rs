use beeutil_core::constants::BEEUTIL_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn, Level};

const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing system
///
/// Reads the filter from `BEEUTIL_LOG`, then `RUST_LOG`, then falls back to
/// `info`. Output goes to stderr so stdout stays clean for command output.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = env_filter();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build the filter from `BEEUTIL_LOG`, `RUST_LOG` or the default
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(BEEUTIL_LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
