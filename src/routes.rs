use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{CreateMovieRequest, MovieView},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie))
        .with_state(state)
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<MovieView>> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidId(id))?;
    let movie = state.catalog.get_movie(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(movie))
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<MovieView>>> {
    Ok(Json(state.catalog.get_movies().await?))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MovieView>)> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let movie = req.validate()?;
    let created = state.catalog.create_movie(movie).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
