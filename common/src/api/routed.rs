use async_trait::async_trait;

use crate::types::{ImageList, IMAGE_LIST_URL};

use super::{
    traits::{HttpRequest, HttpResponse, ImageListAPI},
    wasm_request::WasmRequest,
};

/// A failure to fetch or to decode the image list. Both are treated alike by callers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Request(String),
    #[error("Json conversion error: {0}")]
    JsonDecode(String),
}

#[derive(Debug, Clone)]
pub struct ApiRouteImpl<R = WasmRequest> {
    requester: R,
}

impl ApiRouteImpl<WasmRequest> {
    pub fn new() -> Self {
        Self::with_requester(WasmRequest::new())
    }
}

impl Default for ApiRouteImpl<WasmRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: HttpRequest> ApiRouteImpl<R> {
    pub fn with_requester(requester: R) -> Self {
        Self { requester }
    }
}

#[async_trait(?Send)]
impl<R: HttpRequest + Clone> ImageListAPI for ApiRouteImpl<R> {
    type Error = FetchError;

    async fn image_list(&self) -> Result<ImageList, Self::Error> {
        do_get_request(&self.requester, IMAGE_LIST_URL).await
    }
}

/// Status codes are not checked: any JSON body is accepted.
async fn do_get_request<R: HttpRequest>(requester: &R, url: &str) -> Result<ImageList, FetchError> {
    let response = requester
        .get(url)
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    decode_response(&response)
}

/// Like [`decode_body`], with the status code in the error so error pages are easy to spot.
fn decode_response(response: &HttpResponse) -> Result<ImageList, FetchError> {
    decode_body(&response.body).map_err(|e| match e {
        FetchError::JsonDecode(msg) => {
            FetchError::JsonDecode(format!("HTTP status {}: {msg}", response.status))
        }
        other => other,
    })
}

pub(crate) fn decode_body(body: &str) -> Result<ImageList, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::JsonDecode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::api::stub::StubRequest;

    #[test]
    fn valid_json_is_returned_unchanged() {
        let stub = StubRequest::responding(200, r#"[{"id":"1","author":"A"}]"#);
        let api = ApiRouteImpl::with_requester(stub.clone());

        let list = block_on(api.image_list()).unwrap();

        assert_eq!(list, json!([{"id": "1", "author": "A"}]));
        assert_eq!(stub.requested_urls(), vec![IMAGE_LIST_URL]);
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let stub = StubRequest::responding(200, "<html>not json</html>");
        let api = ApiRouteImpl::with_requester(stub);

        let err = block_on(api.image_list()).unwrap_err();

        assert!(matches!(err, FetchError::JsonDecode(_)), "{err:?}");
    }

    #[test]
    fn decode_error_names_the_status() {
        let api = ApiRouteImpl::with_requester(StubRequest::responding(
            503,
            "<html>Service Unavailable</html>",
        ));

        let err = block_on(api.image_list()).unwrap_err();

        let FetchError::JsonDecode(message) = err else {
            panic!("expected a decode error, got {err:?}");
        };
        assert!(message.starts_with("HTTP status 503: "), "{message}");
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        let api = ApiRouteImpl::with_requester(StubRequest::responding(200, ""));

        assert!(matches!(
            block_on(api.image_list()),
            Err(FetchError::JsonDecode(_))
        ));
    }

    #[test]
    fn connection_failure_is_a_request_error() {
        let api = ApiRouteImpl::with_requester(StubRequest::failing("connection refused"));

        let err = block_on(api.image_list()).unwrap_err();

        assert_eq!(err, FetchError::Request("connection refused".to_string()));
    }

    #[test]
    fn error_status_with_json_body_still_decodes() {
        let api =
            ApiRouteImpl::with_requester(StubRequest::responding(404, r#"{"error":"gone"}"#));

        let list = block_on(api.image_list()).unwrap();

        assert_eq!(list, json!({"error": "gone"}));
    }

    #[test]
    fn every_call_targets_the_same_url() {
        let stub = StubRequest::responding(200, "[]");
        let api = ApiRouteImpl::with_requester(stub.clone());

        for _ in 0..3 {
            block_on(api.image_list()).unwrap();
        }

        assert_eq!(stub.requested_urls(), vec![IMAGE_LIST_URL; 3]);
    }
}
