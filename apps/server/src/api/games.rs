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
    models::{Game, GameCreated, GameListing, Message, NewGame},
};

#[utoipa::path(get, path = "/games", responses((status = 200, body = [GameListing])))]
pub async fn list_games(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GameListing>>> {
    let games = state.game_service.get_games()?;
    Ok(Json(games.into_iter().map(GameListing::from).collect()))
}

#[utoipa::path(
    post,
    path = "/games",
    request_body = NewGame,
    responses(
        (status = 201, body = GameCreated),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewGame>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<GameCreated>)> {
    // A missing or unreadable body counts as a body with every field absent.
    let request = body.map(|Json(inner)| inner).unwrap_or_default();
    let new_game = request
        .into_core()
        .ok_or_else(|| ApiError::BadRequest("Missing required fields".to_string()))?;

    let created = state.game_service.create_game(new_game).await?;
    tracing::info!(game_id = created.id, "Game added");
    Ok((
        StatusCode::CREATED,
        Json(GameCreated {
            message: "Game added successfully".to_string(),
            game: Game::from(created),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/games/{id}",
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 200, body = Message),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Message>> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    state.game_service.delete_game(id).await?;
    tracing::info!(game_id = id, "Game deleted");
    Ok(Json(Message::new("Game deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", delete(delete_game))
}
