//! Contains all the routes that this application can handle.

mod signup;

pub use signup::signup;

use axum::{
    http::StatusCode,
    routing::{any, get},
    Router,
};

use crate::{config::HEALTH_CHECK_PATH, AppState};

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server.
/// The signup route accepts every method, rejecting anything but POST is the handler's job.
pub fn routes(app_state: AppState) -> Router {
    let signup_path = app_state.signup_path.clone();

    Router::new()
        .route(&signup_path, any(signup))
        .with_state(app_state)
        .route(HEALTH_CHECK_PATH, get(health_check))
}
