//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(if verbose { "debug" } else { "warn" })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
}
