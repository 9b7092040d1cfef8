//! Route path and header constants shared by the router and its callers

/// API base path
pub const API_BASE: &str = "/api/v3";

/// Health check, always unauthenticated
pub const PING: &str = "/api/v3/ping";
/// Service and SDK versions, behind the authentication hook
pub const VERSION: &str = "/api/v3/version";

/// Request-tracing header echoed on every response
pub const CORRELATION_HEADER: &str = "x-correlation-id";
pub const CONTENT_TYPE_JSON: &str = "application/json";
