use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, Response},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{
        DefaultOnBodyChunk, DefaultOnEos, DefaultOnFailure, MakeSpan, OnRequest, OnResponse,
        TraceLayer,
    },
};
use tracing::{Level, Span};

use crate::{App, AppState};

use super::{midware, routes::routes, REQUEST_ID_HEADER};

/// The core async function returning a future that will serve this application.
///
/// Accepts an `App` (the `TcpListener` and the `AppState`) and serves the router
/// built by `build_router` until the listener fails.
pub async fn serve(app: App) -> std::io::Result<()> {
    let App {
        app_state,
        listener,
    } = app;

    axum::serve(listener, build_router(app_state)).await
}

/// All the routes wrapped in the request id, tracing and response mapping middleware.
pub fn build_router(app_state: AppState) -> Router {
    let x_request_id: HeaderName = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace_layer = build_trace_layer();

    Router::new().merge(routes(app_state.clone())).layer(
        ServiceBuilder::new()
            // Set UUID per request
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                MakeRequestUuid,
            ))
            .layer(trace_layer)
            // This has to be in front of the Propagation layer because while the request goes through
            // middleware as listed in the ServiceBuilder, the response goes through the middleware stack from the bottom up.
            // If we want the response mapper to find the Propagated header that middleware has to run first!
            .layer(middleware::map_response_with_state(
                app_state,
                midware::response_mapper,
            ))
            // Propagate UUID to response, keep it last so it processes the response first!
            .layer(PropagateRequestIdLayer::new(x_request_id)),
    )
}

/// A helper function that sets up the `tower_http::TraceLayer` - tracing configuration.
///
/// 4xx responses are ordinary client outcomes and are logged at INFO like successes.
/// Only 5xx responses and classifier failures are raised to WARN, the handler already
/// logs the cause of a server error.
fn build_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
    DefaultOnBodyChunk,
    DefaultOnEos,
    DefaultOnFailure,
> {
    TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let uuid = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .map(|uuid| uuid.to_str().unwrap_or("").to_string());

            tracing::error_span!(
                "serve",
                id = uuid,
                method = req.method().to_string(),
                path = req.uri().path()
            )
        })
        .on_request(|req: &Request<Body>, _s: &Span| tracing::info!("START @ {}", req.uri()))
        .on_response(|res: &Response<Body>, latency: Duration, _s: &Span| {
            let st_code = res.status().as_u16();

            if (500..=599).contains(&st_code) {
                tracing::warn!("END in: {:?} - STATUS: {st_code}", latency)
            } else {
                tracing::info!("END in: {:?} - STATUS: {st_code}", latency)
            }
        })
        .on_failure(DefaultOnFailure::new().level(Level::WARN))
}
