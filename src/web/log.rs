use axum::http::{Method, StatusCode, Uri};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::{config::DeploymentConfig, web::Error};

/// Emits one structured line describing a finished request.
/// Logging is best effort, nothing here can fail the request.
pub fn log_request(
    req_id: String,
    deployment: &DeploymentConfig,
    req_method: Method,
    uri: Uri,
    status_code: StatusCode,
    web_error: Option<&Error>,
) {
    let logline = LogLine {
        timestamp: chrono::Utc::now().to_rfc3339(),
        req_id,
        service: &deployment.service_name,
        region: &deployment.region,
        req_method: req_method.to_string(),
        uri: uri.to_string(),
        status_code: status_code.as_u16(),
        error_type: web_error.map(|er| er.as_ref().to_string()),
        error_detail: web_error.map(ToString::to_string),
    };

    info!("LOGLINE: {}", json!(logline));
}

#[derive(Serialize)]
struct LogLine<'a> {
    timestamp: String,
    req_id: String,
    service: &'a str,
    region: &'a str,

    req_method: String,
    uri: String,
    status_code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_detail: Option<String>,
}
