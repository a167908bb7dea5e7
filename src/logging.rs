//! Log output
//!
//! Installs a `tracing` fmt subscriber. `RUST_LOG`, when set, takes
//! precedence over the configured level.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(Level::INFO);
        init(Level::DEBUG);
        tracing::info!("still logging");
    }
}
