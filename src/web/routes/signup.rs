use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{Method, StatusCode},
};
use tracing::{debug, error};

use crate::{
    model::Subscriber,
    web::{reason_phrase, types::SignupRequest, Error, WebResult},
    AppState,
};

/// Takes a signup form and stores it as a subscriber keyed by its email.
///
/// Every early return is final, there is no retry and nothing is written
/// unless the body decoded. The store write is awaited inline, if the client
/// goes away the write is dropped together with this future.
#[tracing::instrument(
    name = "Handling signup request",
    skip_all,
    fields(method = %req.method())
)]
pub async fn signup(
    State(app_state): State<AppState>,
    req: Request,
) -> WebResult<(StatusCode, &'static str)> {
    debug!("{:<12} - Handling new HTTP request", "HANDLER");

    if *req.method() != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let body = to_bytes(req.into_body(), app_state.max_body_bytes)
        .await
        .map_err(|er| Error::Decode(er.to_string()))?;
    if body.is_empty() {
        return Err(Error::MissingBody);
    }

    let signup_req = SignupRequest::parse(&body).map_err(|er| Error::Decode(er.to_string()))?;
    let subscriber = Subscriber::accept(signup_req);

    debug!("{:<12} - Storing new subscriber", "HANDLER");
    app_state
        .store
        .set(&subscriber.email, &subscriber)
        .await
        .inspect_err(|er| error!(error = %er, "failed to store subscriber"))?;

    Ok((StatusCode::OK, reason_phrase(StatusCode::OK)))
}
