//! HTTP front end for the validation engine.
//!
//! A thin adapter: it pulls the IBAN out of the request path, strips
//! whitespace, runs [`parse`](crate::core::parse) and
//! [`Registry::validate`](crate::core::Registry::validate), and encodes the
//! verdict as JSON.
//!
//! # Example
//!
//! ```ignore
//! use ibancheck::server::*;
//!
//! let config = ServerConfig::from_env()?;
//! init_tracing(config.is_dev());
//! serve(&config, AppState::default()).await?;
//! ```

mod config;
mod logging;
mod response;
mod routes;

use std::future::Future;
use std::io;

use thiserror::Error;
use tokio::net::TcpListener;

pub use config::{ConfigError, ServerConfig};
pub use logging::init_tracing;
pub use response::ValidationResponse;
pub use routes::{AppState, create_router, unsupported_route, validate_iban};

/// Errors that stop the server.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("http server terminated: {0}")]
    Serve(#[source] io::Error),
}

/// Bind to `config.bind_address()` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!(%address, "starting web server");
    run(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn run(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
