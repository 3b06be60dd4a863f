use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{Message, NewPlatform, Platform, PlatformCreated},
};

#[utoipa::path(get, path = "/platforms", responses((status = 200, body = [Platform])))]
pub async fn list_platforms(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Platform>>> {
    let platforms = state.platform_service.get_platforms()?;
    Ok(Json(platforms.into_iter().map(Platform::from).collect()))
}

#[utoipa::path(
    post,
    path = "/platforms",
    request_body = NewPlatform,
    responses(
        (status = 201, body = PlatformCreated),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn create_platform(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewPlatform>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PlatformCreated>)> {
    let request = body.map(|Json(inner)| inner).unwrap_or_default();
    let new_platform = request
        .into_core()
        .ok_or_else(|| ApiError::BadRequest("Platform name is required".to_string()))?;

    let created = state.platform_service.create_platform(new_platform).await?;
    tracing::info!(platform_id = created.id, "Platform added");
    Ok((
        StatusCode::CREATED,
        Json(PlatformCreated {
            message: "Platform added successfully".to_string(),
            platform: Platform::from(created),
        }),
    ))
}

/// Platforms still referenced by games are kept and reported as a conflict.
#[utoipa::path(
    delete,
    path = "/platforms/{id}",
    params(("id" = i32, Path, description = "Platform id")),
    responses(
        (status = 200, body = Message),
        (status = 404, body = ErrorBody),
        (status = 409, body = ErrorBody)
    )
)]
pub async fn delete_platform(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Message>> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    state.platform_service.delete_platform(id).await?;
    tracing::info!(platform_id = id, "Platform deleted");
    Ok(Json(Message::new("Platform deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/platforms", get(list_platforms).post(create_platform))
        .route("/platforms/{id}", delete(delete_platform))
}
