pub mod game;
pub mod health;
pub mod openings;

use crate::error::AppError;

/// Unmatched paths get the same `{"detail": ...}` body as every other error.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
