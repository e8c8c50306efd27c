use uuid::Uuid;

use super::dto::{CreateMovieRequest, UpdateMovieRequest};
use super::model::Movie;
use super::repository::MovieRepository;
use crate::common::response::ApiError;
use crate::state::AppState;

const MOVIE_NOT_FOUND: &str = "Movie not found";

pub struct MovieService;

impl MovieService {
    pub fn list(state: &AppState, genre: Option<&str>) -> Result<Vec<Movie>, ApiError> {
        let movies = match genre {
            Some(genre) => MovieRepository::find_by_genre(&state.db, genre)?,
            None => MovieRepository::find_all(&state.db)?,
        };
        Ok(movies)
    }

    pub fn get(state: &AppState, id: Uuid) -> Result<Movie, ApiError> {
        MovieRepository::find_by_id(&state.db, id)?
            .ok_or_else(|| ApiError::not_found(MOVIE_NOT_FOUND))
    }

    pub fn create(state: &AppState, req: CreateMovieRequest) -> Result<Movie, ApiError> {
        let movie = req.into_movie(Uuid::new_v4());
        MovieRepository::insert(&state.db, movie.clone())?;
        Ok(movie)
    }

    pub fn update(state: &AppState, id: Uuid, req: UpdateMovieRequest) -> Result<Movie, ApiError> {
        MovieRepository::update(&state.db, id, &req)?
            .ok_or_else(|| ApiError::not_found(MOVIE_NOT_FOUND))
    }

    pub fn delete(state: &AppState, id: Uuid) -> Result<(), ApiError> {
        if MovieRepository::delete(&state.db, id)? {
            Ok(())
        } else {
            Err(ApiError::not_found(MOVIE_NOT_FOUND))
        }
    }
}
