use async_trait::async_trait;

use crate::{config::LiveOrMock, types::ImageList};

use super::{
    mock::ApiMock,
    routed::{ApiRouteImpl, FetchError},
    traits::ImageListAPI,
};

/// This is a manual `dyn` solution because the API cannot go into a vtable
#[derive(Debug, Clone)]
pub enum ApiAny {
    Live(ApiRouteImpl),
    Mock(ApiMock),
}

impl ApiAny {
    pub fn from_mode(mode: LiveOrMock) -> Self {
        match mode {
            LiveOrMock::Live => ApiAny::Live(ApiRouteImpl::new()),
            LiveOrMock::Mock(settings) => ApiAny::Mock(ApiMock::new_from_config(settings)),
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, ApiAny::Mock(_))
    }
}

#[async_trait(?Send)]
impl ImageListAPI for ApiAny {
    type Error = FetchError;

    async fn image_list(&self) -> Result<ImageList, Self::Error> {
        match self {
            ApiAny::Live(e) => e.image_list().await,
            ApiAny::Mock(e) => e.image_list().await,
        }
    }
}
