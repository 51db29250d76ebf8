//! Tracing setup for front ends embedding the engine
//!
//! The engine itself only emits `tracing` events; installing a subscriber is
//! left to the host. `init_tracing` is the default choice for console hosts.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` does not mention this crate
pub const DEFAULT_DIRECTIVE: &str = "finance_tracker=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed by the host
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing();
        init_tracing();
        tracing::info!("tracing initialized");
    }
}
