//! Folio CLI Library
//!
//! Command implementations for the `folio` binary. The binary entry point
//! lives in `main.rs`; everything it dispatches to is here so the commands
//! stay testable.

pub mod cmd;

// Re-export core types for convenience
pub use folio_core::{Config, Entry, validate_entry};
pub use folio_generator::{BuildStats, Builder, ContentCollector, SiteContent};

/// Initialize tracing with the specified verbosity level.
///
/// `verbose` maps 0 to WARN, 1 to INFO, 2 to DEBUG, and anything higher to
/// TRACE. `RUST_LOG` still takes precedence through the env filter.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
