use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use gamevault_server::{api::app_router, build_state, config::Config};
use tempfile::tempdir;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_and_readyz_work() {
    let tmp = tempdir().unwrap();
    let config = Config::for_db_path(tmp.path().join("test.db").to_string_lossy());
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    for uri in ["/healthz", "/readyz"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "ok".as_bytes());
    }
}

#[tokio::test]
async fn openapi_document_lists_the_catalogue_routes() {
    let tmp = tempdir().unwrap();
    let config = Config::for_db_path(tmp.path().join("test.db").to_string_lossy());
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    for path in ["/games", "/games/{id}", "/platforms", "/platforms/{id}"] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }
}
