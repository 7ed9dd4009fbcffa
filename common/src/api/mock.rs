use async_trait::async_trait;

use crate::{config::MockSettings, types::ImageList};

use super::{
    routed::{decode_body, FetchError},
    sleeper::Sleepr,
    traits::ImageListAPI,
};

/// Two entries shaped like the real list, for working without network access.
pub const DEFAULT_MOCK_BODY: &str = r#"[
    {
        "id": "0",
        "author": "Alejandro Escamilla",
        "width": 5000,
        "height": 3333,
        "url": "https://unsplash.com/photos/yC-Yzbqy7PY",
        "download_url": "https://picsum.photos/id/0/5000/3333"
    },
    {
        "id": "1",
        "author": "Alejandro Escamilla",
        "width": 5000,
        "height": 3333,
        "url": "https://unsplash.com/photos/LNRyGwIJr5c",
        "download_url": "https://picsum.photos/id/1/5000/3333"
    }
]"#;

#[derive(Debug, Clone)]
pub struct ApiMock {
    response_body: String,
    simulated_failure: Option<String>,
    // While doing requests, this is a number [0,1] that will be used to randomly generate errors
    error_probability: f32,
    delay_ms: Option<u32>,
}

impl ApiMock {
    pub fn new(response_body: impl Into<String>) -> Self {
        Self {
            response_body: response_body.into(),
            simulated_failure: None,
            error_probability: 0.,
            delay_ms: None,
        }
    }

    pub fn new_from_config(config: MockSettings) -> Self {
        Self {
            response_body: config
                .response_body
                .unwrap_or_else(|| DEFAULT_MOCK_BODY.to_string()),
            simulated_failure: config.simulated_failure,
            error_probability: config.error_probability.unwrap_or(0.).clamp(0., 1.),
            delay_ms: config.delay_ms,
        }
    }
}

#[async_trait(?Send)]
impl ImageListAPI for ApiMock {
    type Error = FetchError;

    async fn image_list(&self) -> Result<ImageList, Self::Error> {
        if let Some(delay) = self.delay_ms {
            Sleepr::new(delay).sleep().await;
        }

        if let Some(message) = &self.simulated_failure {
            return Err(FetchError::Request(message.clone()));
        }

        if random_0_to_1_float() < self.error_probability {
            return Err(FetchError::Request(
                "Simulated random request failure".to_string(),
            ));
        }

        decode_body(&self.response_body)
    }
}

fn random_0_to_1_float() -> f32 {
    let mut rng = rand::thread_rng();
    rand::Rng::gen_range(&mut rng, 0.0..1.0)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::types::ImageDescriptor;

    #[test]
    fn default_body_is_a_two_image_list() {
        let api = ApiMock::new_from_config(MockSettings::default());

        let list = block_on(api.image_list()).unwrap();

        let descriptors = ImageDescriptor::from_list(&list);
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[1].id, "1");
    }

    #[test]
    fn configured_body_is_decoded() {
        let api = ApiMock::new(r#"[{"id":"1","author":"A"}]"#);

        assert_eq!(
            block_on(api.image_list()).unwrap(),
            json!([{"id": "1", "author": "A"}])
        );
    }

    #[test]
    fn simulated_failure_always_fails() {
        let api = ApiMock::new_from_config(MockSettings {
            simulated_failure: Some("DNS lookup failed".to_string()),
            ..Default::default()
        });

        for _ in 0..5 {
            assert_eq!(
                block_on(api.image_list()).unwrap_err(),
                FetchError::Request("DNS lookup failed".to_string())
            );
        }
    }

    #[test]
    fn certain_error_probability_always_fails() {
        let api = ApiMock::new_from_config(MockSettings {
            error_probability: Some(1.),
            ..Default::default()
        });

        for _ in 0..20 {
            assert!(matches!(
                block_on(api.image_list()),
                Err(FetchError::Request(_))
            ));
        }
    }

    #[test]
    fn zero_error_probability_never_fails() {
        let api = ApiMock::new_from_config(MockSettings {
            error_probability: Some(0.),
            ..Default::default()
        });

        for _ in 0..20 {
            assert!(block_on(api.image_list()).is_ok());
        }
    }

    #[test]
    fn out_of_range_probability_is_clamped() {
        let api = ApiMock::new_from_config(MockSettings {
            error_probability: Some(-3.),
            ..Default::default()
        });

        assert!(block_on(api.image_list()).is_ok());
    }

    #[test]
    fn invalid_body_fails_like_live_decode() {
        let api = ApiMock::new("{not json");

        assert!(matches!(
            block_on(api.image_list()),
            Err(FetchError::JsonDecode(_))
        ));
    }
}
