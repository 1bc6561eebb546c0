//! `ibancheck` HTTP service.
//!
//! Environment: `IBANCHECK_HOST`, `PORT`, `ENVIRONMENT` (`dev` for
//! human-readable logs) and `RUST_LOG`.

use std::process::ExitCode;

use ibancheck::core::Registry;
use ibancheck::server::{AppState, ServerConfig, init_tracing, serve};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(ServerConfig::is_dev));

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Compiles every built-in pattern; a broken table aborts here, before
    // the first request.
    let registry = Registry::builtin();
    tracing::info!(
        countries = ?registry.countries().collect::<Vec<_>>(),
        environment = %config.environment,
        "country rules loaded"
    );

    match serve(&config, AppState::new(registry)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::warn!(error = %err, "http server stopped");
            ExitCode::FAILURE
        }
    }
}
