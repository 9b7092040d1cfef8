//! Route-level authentication decorator
//!
//! A route wrapped with [`AuthenticationHook::protect`] only reaches its
//! handler when the request carries `Authorization: Bearer <jwt>` and the
//! configured [`TokenValidator`] accepts the token. A disabled hook passes
//! every request through untouched.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};
use config_engine::Variables;

use crate::error::{AuthError, Result};
use crate::validator::TokenValidator;

const BEARER_SCHEME: &str = "Bearer";

#[derive(Clone)]
pub struct AuthenticationHook {
    validator: Option<Arc<dyn TokenValidator>>,
}

impl AuthenticationHook {
    /// Pass-through hook, used when security is turned off
    pub fn disabled() -> Self {
        Self { validator: None }
    }

    pub fn with_validator(validator: Arc<dyn TokenValidator>) -> Self {
        Self {
            validator: Some(validator),
        }
    }

    /// Choose the hook from the environment: pass-through when
    /// `EDGEX_SECURITY_SECRET_STORE=false`, otherwise validate with `validator`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingValidator`] when security is enabled and no
    /// validator is available.
    pub fn auto_config(env: &Variables, validator: Option<Arc<dyn TokenValidator>>) -> Result<Self> {
        if !env.is_security_enabled() {
            tracing::info!("Secret store disabled, routes are served without authentication");
            return Ok(Self::disabled());
        }

        validator
            .map(Self::with_validator)
            .ok_or(AuthError::MissingValidator)
    }

    pub fn is_enabled(&self) -> bool {
        self.validator.is_some()
    }

    /// Wrap a route so that it requires authentication
    pub fn protect<S>(&self, route: MethodRouter<S>) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        route.route_layer(middleware::from_fn_with_state(self.clone(), authenticate))
    }

    /// Check request headers, returning the rejection response on failure
    async fn check(&self, headers: &HeaderMap, path: &str) -> std::result::Result<(), Response> {
        let Some(validator) = &self.validator else {
            return Ok(());
        };

        let Some(token) = bearer_token(headers) else {
            tracing::error!(path = path, "Unable to parse JWT; unauthorized");
            return Err(unauthorized());
        };

        match validator.is_jwt_valid(token).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::warn!(path = path, "Request UNAUTHORIZED");
                Err(unauthorized())
            }
            Err(e) => {
                tracing::error!(path = path, error = %e, "Error checking JWT validity");
                Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response())
            }
        }
    }
}

impl std::fmt::Debug for AuthenticationHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationHook")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Middleware entry point, see [`AuthenticationHook::protect`]
pub async fn authenticate(
    State(hook): State<AuthenticationHook>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    match hook.check(request.headers(), &path).await {
        Ok(()) => next.run(request).await,
        Err(rejection) => rejection,
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, rest) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    rest.split(' ').next().filter(|token| !token.is_empty())
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::MockTokenValidator;
    use axum::{body::Body, http::Request as HttpRequest, routing::get, Router};
    use config_engine::ENV_KEY_SECURITY_SECRET_STORE;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(hook: &AuthenticationHook) -> Router {
        Router::new().route("/protected", hook.protect(get(|| async { "inner" })))
    }

    async fn call(app: Router, authorization: Option<&str>) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn validator_returning(result: Result<bool>) -> Arc<dyn TokenValidator> {
        let mut mock = MockTokenValidator::new();
        mock.expect_is_jwt_valid()
            .returning(move |_| result.clone());
        Arc::new(mock)
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));

        headers.insert(AUTHORIZATION, "bearer abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc"));

        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }

    #[tokio::test]
    async fn test_disabled_hook_passes_through() {
        let (status, body) = call(app(&AuthenticationHook::disabled()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "inner");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let mut mock = MockTokenValidator::new();
        mock.expect_is_jwt_valid().never();
        let hook = AuthenticationHook::with_validator(Arc::new(mock));

        let (status, body) = call(app(&hook), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Unauthorized");
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let mut mock = MockTokenValidator::new();
        mock.expect_is_jwt_valid()
            .withf(|token| token == "good-token")
            .times(1)
            .returning(|_| Ok(true));
        let hook = AuthenticationHook::with_validator(Arc::new(mock));

        let (status, body) = call(app(&hook), Some("Bearer good-token")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "inner");
    }

    #[tokio::test]
    async fn test_rejected_token_is_unauthorized() {
        let hook = AuthenticationHook::with_validator(validator_returning(Ok(false)));

        let (status, _) = call(app(&hook), Some("Bearer bad-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_validator_error_is_internal() {
        let failure = AuthError::Validation("secret store unreachable".to_string());
        let hook = AuthenticationHook::with_validator(validator_returning(Err(failure.clone())));

        let (status, body) = call(app(&hook), Some("Bearer some-token")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, failure.to_string());
    }

    #[test]
    fn test_auto_config() {
        let insecure = Variables::from_map([(ENV_KEY_SECURITY_SECRET_STORE, "false")]);
        let hook = AuthenticationHook::auto_config(&insecure, None).unwrap();
        assert!(!hook.is_enabled());

        let secure = Variables::default();
        assert_eq!(
            AuthenticationHook::auto_config(&secure, None).unwrap_err(),
            AuthError::MissingValidator
        );

        let hook = AuthenticationHook::auto_config(&secure, Some(validator_returning(Ok(true)))).unwrap();
        assert!(hook.is_enabled());
    }
}
