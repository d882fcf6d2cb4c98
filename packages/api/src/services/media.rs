use store::models::MediaAsset;

use crate::client::Api;
use crate::error::ApiError;

pub async fn list(api: &Api) -> Result<Vec<MediaAsset>, ApiError> {
    api.get("/media").await
}

/// Upload a file as multipart form data. The backend answers with the stored
/// asset record.
pub async fn upload(
    api: &Api,
    filename: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<MediaAsset, ApiError> {
    api.upload("/media", filename, content_type, bytes).await
}

pub async fn delete(api: &Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/media/{id}")).await
}
