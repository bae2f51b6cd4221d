//! Diagnostic tracing for the simulator.
//!
//! Reports go to stdout; everything logged here goes to stderr so the two
//! never mix. Verbosity comes from `RUST_LOG` and defaults to `warn`.
//!
//! ```bash
//! RUST_LOG=toy_robot=trace toy_robot commands.txt
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, before anything logs.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
