use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Create the application router
///
/// Only `/` and `/health` are routed. Everything else gets axum's default
/// empty 404.
#[tracing::instrument]
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body, Bytes},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use futures::future::join_all;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_bytes(response: Response) -> Bytes {
        to_bytes(response.into_body(), usize::MAX).await.unwrap()
    }

    #[tokio::test]
    async fn root_returns_plain_text_banner() {
        let app = create_router();

        let response = send(&app, Method::GET, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            body_bytes(response).await,
            "Vulnerable Python App - SCA Testing Lab"
        );
    }

    #[tokio::test]
    async fn root_ignores_query_string() {
        let app = create_router();

        let response = send(&app, Method::GET, "/?name=ignored&debug=1").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_bytes(response).await,
            "Vulnerable Python App - SCA Testing Lab"
        );
    }

    #[tokio::test]
    async fn health_returns_fixed_json() {
        let app = create_router();

        let response = send(&app, Method::GET, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            body,
            json!({
                "status": "running",
                "message": "This app has intentionally outdated dependencies for SCA scanning demonstration"
            })
        );
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let app = create_router();

        for _ in 0..5 {
            let response = send(&app, Method::GET, "/").await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                body_bytes(response).await,
                "Vulnerable Python App - SCA Testing Lab"
            );
        }
    }

    #[tokio::test]
    async fn unknown_paths_return_not_found() {
        let app = create_router();

        for uri in ["/missing", "/health/extra", "/api/health", "/admin"] {
            let response = send(&app, Method::GET, uri).await;
            assert_eq!(
                response.status(),
                StatusCode::NOT_FOUND,
                "{uri} should not be routed"
            );
        }
    }

    #[tokio::test]
    async fn not_found_does_not_affect_known_routes() {
        let app = create_router();

        let response = send(&app, Method::GET, "/does-not-exist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_method_is_not_success() {
        let app = create_router();

        let response = send(&app, Method::POST, "/health").await;

        assert!(!response.status().is_success());
    }

    #[tokio::test]
    async fn concurrent_health_bodies_are_identical() {
        let app = create_router();

        let responses = join_all((0..16).map(|_| send(&app, Method::GET, "/health"))).await;
        let bodies = join_all(responses.into_iter().map(body_bytes)).await;

        let first = &bodies[0];
        assert!(!first.is_empty());
        assert!(bodies.iter().all(|body| body == first));
    }
}
