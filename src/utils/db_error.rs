//! Mapping from sqlx errors to the application error taxonomy.

use crate::error::AppError;

/// Converts a [`sqlx::Error`] into an [`AppError`].
///
/// Unique-constraint violations become [`AppError::DuplicateKey`] so the
/// shortening service can recover from code collisions locally; everything
/// else is [`AppError::StoreUnavailable`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::DuplicateKey {
            constraint: db.constraint().unwrap_or("unknown").to_string(),
        };
    }

    AppError::StoreUnavailable {
        reason: e.to_string(),
    }
}
