use async_trait::async_trait;

use crate::types::ImageList;

#[async_trait(?Send)]
pub trait ImageListAPI: Clone {
    type Error: std::error::Error + Send + Sync + Clone + 'static;

    /// Fetches the image list from its fixed source and decodes the body as JSON.
    async fn image_list(&self) -> Result<ImageList, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait(?Send)]
pub trait HttpRequest {
    type Error: std::error::Error + 'static;

    async fn get(&self, url: &str) -> Result<HttpResponse, Self::Error>;
}
