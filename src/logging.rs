//! Tracing subscriber setup.
//!
//! Log lines go to stderr so that `show` and `init` output on stdout stays
//! machine-readable. The filter comes from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. If one is already installed it is kept and
/// a warning is printed.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}
