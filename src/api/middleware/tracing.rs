//! Per-request spans for the camps API.
//!
//! Spans are keyed by the matched route template (`/api/camps/{moniker}/talks/{id}`)
//! so log lines group by endpoint rather than by moniker. Masked 500s are
//! logged at `ERROR` through the failure hook.
//!
//! ```text
//! INFO http{method=POST route=/api/camps uri=/api/camps}: started processing request
//! INFO http{method=POST route=/api/camps uri=/api/camps}: finished processing request latency=4 ms status=201
//! ```

use axum::{body::Body, extract::MatchedPath, http::Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse,
    TraceLayer,
};
use tracing::{Level, Span};

pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request<Body>) -> Span,
    DefaultOnRequest,
    DefaultOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    DefaultOnFailure,
>;

/// Trace layer applied by [`crate::routes::app_router`].
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(request_span as fn(&Request<Body>) -> Span)
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("unmatched");

    tracing::info_span!(
        "http",
        method = %request.method(),
        route,
        uri = %request.uri().path(),
    )
}
