use std::process::ExitCode;

use lendscan::bootstrap::run;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the normalized records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("lendscan error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
