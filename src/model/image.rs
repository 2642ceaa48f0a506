use utoipa::ToSchema;

/// Multipart body accepted by the image upload endpoints.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadDto {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
