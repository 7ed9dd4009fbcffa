use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{HttpRequest, HttpResponse};

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct StubError(String);

/// A scripted network layer that remembers every URL it was asked for.
#[derive(Debug, Clone)]
pub struct StubRequest {
    outcome: Result<HttpResponse, String>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StubRequest {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            requested: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requested: Arc::default(),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl HttpRequest for StubRequest {
    type Error = StubError;

    async fn get(&self, url: &str) -> Result<HttpResponse, Self::Error> {
        self.requested.lock().unwrap().push(url.to_string());
        self.outcome.clone().map_err(StubError)
    }
}
