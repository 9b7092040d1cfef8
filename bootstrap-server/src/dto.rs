//! JSON payloads of the common endpoints

use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Version of the REST API contract
pub const API_VERSION: &str = "v3";

/// Same layout as Go's `time.UnixDate`
const UNIX_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Fields shared by every response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse {
    pub api_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status_code: u16,
}

impl BaseResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            request_id: None,
            message: None,
            status_code: status.as_u16(),
        }
    }
}

/// Body of `GET /api/v3/ping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub timestamp: String,
    pub service_name: String,
}

impl PingResponse {
    pub fn new(service_name: &str) -> Self {
        Self {
            base: BaseResponse::new(StatusCode::OK),
            timestamp: Utc::now().format(UNIX_DATE_FORMAT).to_string(),
            service_name: service_name.to_string(),
        }
    }
}

/// Body of `GET /api/v3/version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub version: String,
    pub service_name: String,
    /// Only present for services built on an SDK
    #[serde(
        rename = "sdk_version",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sdk_version: Option<String>,
}

impl VersionResponse {
    pub fn new(service_version: &str, service_name: &str) -> Self {
        Self {
            base: BaseResponse::new(StatusCode::OK),
            version: service_version.to_string(),
            service_name: service_name.to_string(),
            sdk_version: None,
        }
    }

    pub fn with_sdk(service_version: &str, sdk_version: &str, service_name: &str) -> Self {
        Self {
            sdk_version: Some(sdk_version.to_string()),
            ..Self::new(service_version, service_name)
        }
    }
}
