use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::store::StoreError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("request body is missing")]
    MissingBody,
    /// Holds the decoder's own message, it is what the client gets back.
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::MissingBody => StatusCode::BAD_REQUEST,
            Error::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain text the client receives: the reason phrase for protocol errors,
    /// the underlying error message otherwise.
    pub fn client_message(&self) -> String {
        match self {
            Error::MethodNotAllowed | Error::MissingBody => {
                reason_phrase(self.status_code()).to_string()
            }
            Error::Decode(_) | Error::Store(_) => self.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = (self.status_code(), self.client_message()).into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

pub fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or_default()
}
