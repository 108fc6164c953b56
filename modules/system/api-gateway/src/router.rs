use std::sync::Arc;

use authn_resolver_sdk::AuthNResolverClient;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::post;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::auth::{self, AuthState};
use crate::config::ApiGatewayConfig;
use crate::login::{self, LOGIN_PATH};

/// Build the application router.
///
/// `routes` holds the application's own endpoints; the login endpoint is
/// merged in. Middleware, outermost first:
/// trace -> timeout -> body limit -> auth -> routes
///
/// # Errors
///
/// Fails if the auth header configuration is invalid.
pub fn build_router(
    cfg: &ApiGatewayConfig,
    authn_client: Arc<dyn AuthNResolverClient>,
    routes: Router,
) -> anyhow::Result<Router> {
    let auth_state = AuthState::new(Arc::clone(&authn_client), &cfg.auth_header)?;

    let login_routes = Router::new()
        .route(LOGIN_PATH, post(login::login))
        .with_state(authn_client);

    let mut router = routes.merge(login_routes);

    // 4) Auth
    router = router.layer(from_fn_with_state(auth_state, auth::authn_middleware));

    // 3) Body limit
    router = router.layer(RequestBodyLimitLayer::new(cfg.defaults.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(cfg.defaults.body_limit_bytes));

    // 2) Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        axum::http::StatusCode::GATEWAY_TIMEOUT,
        cfg.defaults.request_timeout(),
    ));

    // 1) Trace
    router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    module = "api_gateway",
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: std::time::Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    );

    Ok(router)
}
