use anyhow::Result;
use tracing_subscriber::EnvFilter;
use worknorm::commands::Cli;
use worknorm::libs::messages::macros::is_debug_mode;

/// Installs a stderr subscriber when debug output was requested.
///
/// `RUST_LOG` picks the filter; `WORKNORM_DEBUG` alone enables `debug` level.
fn init_tracing() {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    Cli::menu()
}
