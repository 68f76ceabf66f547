//! Signup intake service: takes an email and a consent flag over HTTP and stores
//! them as a subscriber document keyed by the email.

pub mod app;
pub mod config;
mod error;
pub mod model;
pub mod store;
pub mod web;

pub use app::{App, AppState};
pub use error::{Error, Result};
pub use web::serve;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Human readable output for local runs, `RUST_LOG` overrides the `debug` default.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .compact()
        .init();
}

/// One JSON object per event for the log collector, `RUST_LOG` overrides the `info` default.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
