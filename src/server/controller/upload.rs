use axum::{body::Bytes, extract::Multipart};

use crate::server::error::{validation::ValidationError, AppError};

/// Multipart field carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

/// Reads the `image` field of a multipart body.
///
/// # Returns
/// - `Ok(Bytes)` - Raw file contents
/// - `Err(AppError::ValidationErr(InvalidImage))` - No `image` field was submitted
/// - `Err(AppError::BadRequest)` - The body is not valid multipart
pub async fn read_image(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() == Some(IMAGE_FIELD) {
            return field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()));
        }
    }

    Err(ValidationError::InvalidImage("No file was submitted.".to_string()).into())
}
