use std::fs;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::Context;
use thiserror::Error;
use tracing::info;

use crate::modules::movie::model::Movie;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie store lock poisoned")]
    Poisoned,
}

/// Process-wide movie store. Clones share the underlying list, so every
/// handler works against the same records; the lock keeps each repository
/// operation atomic under the multi-threaded runtime.
#[derive(Clone, Default)]
pub struct Database {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl Database {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Movie>>, StoreError> {
        self.movies.read().map_err(|_| StoreError::Poisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Movie>>, StoreError> {
        self.movies.write().map_err(|_| StoreError::Poisoned)
    }
}

/// Loads the bootstrap dataset once at startup.
pub fn load_database(path: &str) -> anyhow::Result<Database> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read movie dataset at {path}"))?;
    let movies: Vec<Movie> =
        serde_json::from_str(&raw).context("movie dataset is not valid JSON")?;

    info!("✅ Loaded {} movies from {}", movies.len(), path);
    Ok(Database::new(movies))
}
