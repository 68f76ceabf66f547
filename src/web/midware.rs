use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
};
use uuid::Uuid;

use crate::{
    web::{log, Error, REQUEST_ID_HEADER},
    AppState,
};

/// Runs once per request after the handler returned, whatever the outcome,
/// and flushes the request log line. The response passes through untouched.
pub async fn response_mapper(
    State(app_state): State<AppState>,
    req_method: Method,
    uri: Uri,
    resp: Response,
) -> Response {
    let req_id = resp
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|id| id.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let web_error = resp.extensions().get::<Arc<Error>>().map(Arc::as_ref);

    log::log_request(
        req_id,
        &app_state.deployment,
        req_method,
        uri,
        resp.status(),
        web_error,
    );

    resp
}
