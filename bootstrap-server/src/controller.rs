//! Controller for the REST endpoints every service exposes

use axum::{
    http::{
        header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS},
        HeaderMap, HeaderName, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::dto::{PingResponse, VersionResponse};
use crate::routes::paths;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Version {
    service_version: String,
    sdk_version: Option<String>,
}

/// Holds the service identity reported by the common endpoints.
///
/// Configure it with the setters before handing it to
/// [`common_routes`](crate::routes::common_routes); it is read-only once
/// serving starts.
#[derive(Debug, Clone, Default)]
pub struct CommonController {
    service_name: String,
    version: Version,
}

impl CommonController {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            version: Version::default(),
        }
    }

    /// Set the service's version and the SDK version, if the service is
    /// built on one. An empty SDK version counts as none.
    pub fn set_version(&mut self, service_version: &str, sdk_version: Option<&str>) {
        self.version = Version {
            service_version: service_version.to_string(),
            sdk_version: sdk_version
                .filter(|sdk| !sdk.is_empty())
                .map(str::to_string),
        };
    }

    /// Handle `/ping`, used to check that the service is up
    pub fn ping(&self, headers: &HeaderMap) -> Response {
        let response = PingResponse::new(&self.service_name);
        self.send_response(headers, paths::PING, &response, StatusCode::OK)
    }

    /// Handle `/version`
    pub fn version(&self, headers: &HeaderMap) -> Response {
        let response = match &self.version.sdk_version {
            Some(sdk_version) => VersionResponse::with_sdk(
                &self.version.service_version,
                sdk_version,
                &self.service_name,
            ),
            None => VersionResponse::new(&self.version.service_version, &self.service_name),
        };
        self.send_response(headers, paths::VERSION, &response, StatusCode::OK)
    }

    /// Encode `response` as JSON, echoing the request's correlation ID.
    ///
    /// Encoding failures are logged and answered with a 500 carrying the
    /// error text.
    pub fn send_response<T: Serialize>(
        &self,
        request_headers: &HeaderMap,
        api: &str,
        response: &T,
        status: StatusCode,
    ) -> Response {
        let correlation_id = request_headers.get(paths::CORRELATION_HEADER).cloned();

        let mut headers = HeaderMap::new();
        if let Some(id) = &correlation_id {
            headers.insert(HeaderName::from_static(paths::CORRELATION_HEADER), id.clone());
        }

        match serde_json::to_vec(response) {
            Ok(body) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(paths::CONTENT_TYPE_JSON));
                (status, headers, body).into_response()
            }
            Err(e) => {
                tracing::error!(
                    api = api,
                    error = %e,
                    correlation_id = correlation_id
                        .as_ref()
                        .and_then(|id| id.to_str().ok())
                        .unwrap_or_default(),
                    "Unable to marshal {} response",
                    api
                );
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                );
                headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
                (StatusCode::INTERNAL_SERVER_ERROR, headers, e.to_string()).into_response()
            }
        }
    }
}
