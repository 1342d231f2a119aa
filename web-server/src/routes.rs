//! Router assembly
//!
//! Builds the full application: page routes, embedded static assets and
//! the middleware stack (compression, tracing, request ids, request
//! logging). No auth layer - every route is public.

use axum::middleware as axum_middleware;
use axum::{Router, extract::Path, http::header, response::IntoResponse, routing::get};
use http::{HeaderName, HeaderValue};
use include_dir::{Dir, include_dir};
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;
use crate::pages;
use crate::utils::AppError;

/// Stylesheet and page-behavior script, embedded at compile time
static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware)
pub fn build_router() -> Router<ServerState> {
    pages::build_router().route("/assets/{*path}", get(serve_asset))
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Request logging - records method/path/status/latency
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .with_state(state.clone())
}

/// Serve an embedded asset with a long-lived cache header
async fn serve_asset(Path(path): Path<String>) -> Result<impl IntoResponse, AppError> {
    let file = ASSETS
        .get_file(&path)
        .ok_or_else(|| AppError::not_found(format!("asset {path}")))?;

    let content_type = match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        file.contents(),
    ))
}
