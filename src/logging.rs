//! Diagnostics setup (tracing + tracing-subscriber)
//!
//! `RUST_LOG` wins when set, e.g. `RUST_LOG=pyt_kpi=trace`. Otherwise only
//! warnings are shown, or debug output with `--verbose`. Logs go to stderr so
//! they never mix with the console report.

use tracing_subscriber::{fmt, EnvFilter};

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "pyt_kpi=debug"
    } else {
        "pyt_kpi=warn"
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
