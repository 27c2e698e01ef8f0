use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "todos=debug";

/// Installs the `tracing` subscriber when debug mode is on.
///
/// The filter comes from `RUST_LOG` and falls back to `todos=debug`. Output goes
/// to stderr so it never mixes with rendered tables or `--json` output.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
