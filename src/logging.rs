use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging. Honors `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    if let Err(err) = result {
        eprintln!("Warning: failed to initialise logging: {err}");
    }
}
