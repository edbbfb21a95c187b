//! Logging bootstrap built on `tracing-subscriber`.
//!
//! Library crates only emit `tracing` events. Binaries, demos and benches
//! call one of these functions once at startup.

use tracing_subscriber::EnvFilter;

/// Default filter directive used by [`init`].
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatting subscriber.
///
/// `RUST_LOG` wins when set, otherwise [`DEFAULT_FILTER`] applies.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a formatting subscriber with an explicit filter directive,
/// e.g. `"linea=trace"`.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    // A second init (tests, repeated demos) keeps the first subscriber.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
