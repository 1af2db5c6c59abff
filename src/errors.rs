use thiserror::Error;

/// Failures the persistence gateway can report. Only the get-by-id
/// endpoint surfaces `NotFound` as a 404; every other path collapses
/// store failures into a 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no matching row")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
