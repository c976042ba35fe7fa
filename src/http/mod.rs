//! HTTP transport - maps routes onto queue, gate and status operations.
//!
//! Routes are split in two groups. Activation, status and the access QR code are always
//! reachable; every ticket route sits behind a route layer that answers
//! `403 SYSTEM_INACTIVE` while the gate is closed, whatever the HTTP method.

mod error;
mod extract;
mod handlers;
mod state;

pub use error::ErrorBody;
pub use state::AppState;

use crate::errors::{Error, Result};
use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Rejects the request unless the activation gate is open.
async fn require_active(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> std::result::Result<Response, Error> {
    state.gate.ensure_active()?;
    Ok(next.run(request).await)
}

/// CORS policy allowing only the configured frontend origin.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(frontend_url).map_err(|e| Error::Config {
        message: format!("Invalid FRONTEND_URL '{frontend_url}': {e}"),
    })?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/tickets", get(handlers::list).post(handlers::register))
        .route("/tickets/call-next", post(handlers::call_next))
        .route("/tickets/reset", post(handlers::reset))
        .route("/tickets/:id/recall", post(handlers::recall))
        .route("/tickets/:id", delete(handlers::remove))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_active));

    Router::new()
        .route("/system/activate", post(handlers::activate))
        .route("/system/deactivate", post(handlers::deactivate))
        .route("/status", get(handlers::status))
        .route("/qrcode", get(handlers::access_code))
        .merge(gated)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
