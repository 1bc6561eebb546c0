//! Routes of the IBAN service.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /v1/iban/{iban}/validate | [`validate_iban`] |
//! | any | anything else | [`unsupported_route`] (404) |

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use super::response::ValidationResponse;
use crate::core::{Registry, compact, parse};

/// Shared, read-only request state.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub registry: &'static Registry,
}

impl AppState {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for AppState {
    /// Serves the built-in country rules without copying them.
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/iban/{iban}/validate",
            get(validate_iban).fallback(unsupported_route),
        )
        .route(
            "/v1/iban/{iban}/validate/",
            get(validate_iban).fallback(unsupported_route),
        )
        .fallback(unsupported_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /v1/iban/{iban}/validate
///
/// - `200 OK`: the IBAN parsed; `is_valid` carries the verdict and `error`
///   the reason when it is false. A rejected IBAN is an expected outcome,
///   not a failed request.
/// - `422 Unprocessable Entity`: the path segment is not IBAN-shaped,
///   including segments that do not percent-decode to UTF-8.
///
/// Whitespace anywhere in the segment is ignored, so both
/// `GB29NWBK60161331926819` and `GB29 NWBK 6016 1331 9268 19` work.
pub async fn validate_iban(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    raw: Result<Path<String>, PathRejection>,
) -> (StatusCode, Json<ValidationResponse>) {
    tracing::info!(%method, path = uri.path(), "request received");

    let raw = match raw {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            let message = format!("incorrect IBAN format: {}", rejection.body_text());
            tracing::warn!(error = %message, "request failed");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationResponse::failed(message)),
            );
        }
    };

    let iban = match parse(&compact(&raw)) {
        Ok(iban) => iban,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationResponse::failed(err)),
            );
        }
    };

    let electronic = iban.to_string();
    let response = match state.registry.validate(&iban) {
        Ok(()) => ValidationResponse::valid(iban),
        Err(err) => ValidationResponse::invalid(iban, err),
    };
    tracing::info!(
        iban = %electronic,
        is_valid = response.is_valid,
        error = response.error.as_deref(),
        "iban validated"
    );

    (StatusCode::OK, Json(response))
}

/// Catch-all for unknown paths and methods.
pub async fn unsupported_route(method: Method, uri: Uri) -> (StatusCode, Json<ValidationResponse>) {
    tracing::info!(%method, path = uri.path(), "request received");
    (
        StatusCode::NOT_FOUND,
        Json(ValidationResponse::failed(format!(
            "unsupported route: {}",
            uri.path()
        ))),
    )
}
