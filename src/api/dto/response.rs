//! Success envelope shared by all API endpoints.

use serde::Serialize;

/// JSON success body: `{"success":true,"data":{...}}`.
///
/// The failure counterpart lives in [`crate::error`], produced by
/// `AppError`'s `IntoResponse` implementation.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
