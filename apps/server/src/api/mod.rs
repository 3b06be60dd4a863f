use std::{sync::Arc, time::Duration};

use axum::{error_handling::HandleErrorLayer, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::{handle_middleware_error, ErrorBody},
    main_lib::AppState,
    models::{
        Game, GameCreated, GameListing, Message, NewGame, NewPlatform, Platform, PlatformCreated,
    },
};

pub mod games;
pub mod health;
pub mod platforms;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        games::list_games,
        games::create_game,
        games::delete_game,
        platforms::list_platforms,
        platforms::create_platform,
        platforms::delete_platform
    ),
    components(schemas(
        Game,
        GameCreated,
        GameListing,
        Message,
        NewGame,
        NewPlatform,
        Platform,
        PlatformCreated,
        ErrorBody
    )),
    tags((name = "gamevault"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

/// Bounds request handling time; a request that runs out gets a JSON 408.
fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .timeout(timeout),
    )
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let router = Router::new()
        .merge(health::router())
        .merge(games::router())
        .merge(platforms::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id());

    with_request_timeout(router, config.request_timeout).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn slow_request_times_out_with_json_error() {
        let router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let app = with_request_timeout(router, Duration::from_millis(20));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Request timed out");
    }
}
