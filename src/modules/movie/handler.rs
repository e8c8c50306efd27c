use super::dto::{CreateMovieRequest, UpdateMovieRequest};
use super::model::Movie;
use super::service::MovieService;
use crate::common::extract::ValidatedJson;
use crate::common::response::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Keep only movies tagged with this genre (case-insensitive).
    pub genre: Option<String>,
}

/// List all movies, optionally filtered by genre
#[utoipa::path(
    get,
    path = "/movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "List of movies", body = Vec<Movie>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let movies = MovieService::list(&state, query.genre.as_deref())?;
    Ok(Json(movies))
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = MovieService::get(&state, id)?;
    Ok(Json(movie))
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid payload")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMovieRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = MovieService::create(&state, payload)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Partially update a movie
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Updated movie", body = Movie),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateMovieRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = MovieService::update(&state, id, payload)?;
    Ok(Json(movie))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    MovieService::delete(&state, id)?;
    Ok(Json(json!({ "message": "Movie deleted" })))
}
