use store::models::SiteSettings;

use crate::client::Api;
use crate::error::ApiError;

pub async fn get(api: &Api) -> Result<SiteSettings, ApiError> {
    api.get("/settings").await
}

pub async fn update(api: &Api, settings: &SiteSettings) -> Result<SiteSettings, ApiError> {
    api.put("/settings", settings).await
}
