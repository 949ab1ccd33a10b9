use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Eroare la baza de date: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Eroare la migrarea bazei de date: {0}")]
    Migration(#[from] refinery::Error),

    #[error("Eroare de fișier: {0}")]
    Io(#[from] std::io::Error),

    #[error("Date JSON invalide: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Salvarea rezultatului a eșuat: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
