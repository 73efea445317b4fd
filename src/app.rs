/*
 * Responsibility
 * - tracing / panic hook setup
 * - Config → AppState → Router
 * - Apply middleware (http, security headers, api key)
 * - Start axum::serve()
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::error::AppError;
use crate::middleware;
use crate::state::AppState;

fn init_tracing() {
    // RUST_LOG wins when set, e.g. RUST_LOG=info,apikey_gate=debug,tower_http=debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development: crash loudly. production: default hook, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().map_err(AppError::from)?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let addr = config.addr;
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn fallback() -> AppError {
    AppError::not_found("route")
}

pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let router = Router::new()
        .route("/health", get(api::v1::handlers::health::health))
        .nest("/api/v1", api::v1::routes())
        .fallback(fallback)
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(res: axum::response::Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_routes_need_no_key() {
        for uri in ["/health", "/api/v1/health"] {
            let res = app().oneshot(get_request(uri, None)).await.unwrap();
            assert_eq!(res.status(), StatusCode::OK, "uri: {uri}");
            assert_eq!(json_body(res).await["status"], "ok");
        }
    }

    #[tokio::test]
    async fn whoami_without_header_is_unauthorized() {
        let res = app()
            .oneshot(get_request("/api/v1/whoami", None))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.headers().get(header::WWW_AUTHENTICATE).unwrap(), "ApiKey");
        let body = json_body(res).await;
        assert_eq!(body["error"]["code"], "NO_AUTH_HEADER");
        assert_eq!(body["error"]["message"], "no authorization header included");
    }

    #[tokio::test]
    async fn whoami_with_bearer_is_malformed() {
        let res = app()
            .oneshot(get_request("/api/v1/whoami", Some("Bearer abc123")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(res).await["error"]["code"], "MALFORMED_AUTH_HEADER");
    }

    #[tokio::test]
    async fn whoami_with_key_returns_fingerprint() {
        let res = app()
            .oneshot(get_request("/api/v1/whoami", Some("ApiKey abc123 extra")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");

        let body = json_body(res).await;
        assert_eq!(body["scheme"], "ApiKey");
        let fingerprint = body["fingerprint"].as_str().unwrap();
        assert_eq!(fingerprint.len(), 43);
        assert!(!body.to_string().contains("abc123"));
    }

    #[tokio::test]
    async fn whoami_mounted_without_middleware_is_unauthorized() {
        let router = Router::new()
            .route("/whoami", get(api::v1::handlers::whoami::whoami))
            .with_state(AppState::new(Config::default()));

        let res = router
            .oneshot(get_request("/whoami", Some("ApiKey abc123")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.headers().get(header::WWW_AUTHENTICATE).unwrap(), "ApiKey");
        assert_eq!(json_body(res).await["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let res = app()
            .oneshot(get_request("/health", None))
            .await
            .unwrap();
        assert!(
            res.headers()
                .contains_key(middleware::http::REQUEST_ID_HEADER)
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let res = app()
            .oneshot(get_request("/api/v1/nope", Some("ApiKey abc123")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(res).await["error"]["code"], "NOT_FOUND");
    }
}
