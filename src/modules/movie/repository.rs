use uuid::Uuid;

use super::dto::UpdateMovieRequest;
use super::model::Movie;
use crate::infrastructure::db::memory::{Database, StoreError};

pub struct MovieRepository;

impl MovieRepository {
    pub fn find_all(db: &Database) -> Result<Vec<Movie>, StoreError> {
        Ok(db.read()?.clone())
    }

    pub fn find_by_genre(db: &Database, genre: &str) -> Result<Vec<Movie>, StoreError> {
        let movies = db.read()?;
        Ok(movies
            .iter()
            .filter(|movie| movie.genre.iter().any(|g| g.matches(genre)))
            .cloned()
            .collect())
    }

    pub fn find_by_id(db: &Database, id: Uuid) -> Result<Option<Movie>, StoreError> {
        Ok(db.read()?.iter().find(|movie| movie.id == id).cloned())
    }

    pub fn insert(db: &Database, movie: Movie) -> Result<(), StoreError> {
        db.write()?.push(movie);
        Ok(())
    }

    /// Merges the present fields of `changes` into the stored record and
    /// returns the merged record. The locate-merge-write sequence runs
    /// under a single write guard.
    pub fn update(
        db: &Database,
        id: Uuid,
        changes: &UpdateMovieRequest,
    ) -> Result<Option<Movie>, StoreError> {
        let mut movies = db.write()?;
        Ok(movies.iter_mut().find(|movie| movie.id == id).map(|movie| {
            changes.apply_to(movie);
            movie.clone()
        }))
    }

    /// Removes the record, reporting whether it existed. A miss leaves the
    /// list untouched.
    pub fn delete(db: &Database, id: Uuid) -> Result<bool, StoreError> {
        let mut movies = db.write()?;
        match movies.iter().position(|movie| movie.id == id) {
            Some(index) => {
                movies.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
