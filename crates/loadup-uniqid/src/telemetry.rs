//! Log output for the binary.
//!
//! IDs go to stdout, so logs are written to stderr. Verbosity follows
//! `RUST_LOG` and defaults to `warn`; the library's `loadup`, `CRITICAL` and
//! `ERROR` targets can be filtered individually, e.g.
//! `RUST_LOG=warn,loadup_common_util=debug`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(true)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
