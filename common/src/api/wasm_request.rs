use async_trait::async_trait;

use super::traits::{HttpRequest, HttpResponse};

#[derive(Debug, Clone, Copy, Default)]
pub struct WasmRequest {}

impl WasmRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait(?Send)]
impl HttpRequest for WasmRequest {
    type Error = reqwasm::Error;

    async fn get(&self, url: &str) -> Result<HttpResponse, Self::Error> {
        let response = reqwasm::http::Request::get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
