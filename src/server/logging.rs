//! Tracing subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// `dev` gets the human-readable formatter, every other environment gets
/// one JSON object per line. The filter comes from `RUST_LOG` and defaults
/// to `info`. Calling this twice is a no-op.
pub fn init_tracing(dev: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let registry = tracing_subscriber::registry().with(filter);
    // already-installed subscriber is not an error
    let _ = if dev {
        registry.with(fmt::layer().pretty()).try_init()
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    };
}
