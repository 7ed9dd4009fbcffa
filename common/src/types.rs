use serde::{Deserialize, Serialize};

/// The endpoint listing the images. Every image-list request goes here, unchanged.
pub const IMAGE_LIST_URL: &str = "https://picsum.photos/v2/list/";

const THUMBNAIL_BASE_URL: &str = "https://picsum.photos/id";

pub const HELLO_RESPONSE: &str = "WelcomeToTheGallery!";

/// Whatever the remote API returned, decoded but otherwise untouched.
pub type ImageList = serde_json::Value;

/// A lenient view over a single element of an [`ImageList`], used for rendering only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct ImageDescriptor {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}

impl ImageDescriptor {
    /// Extracts descriptors from a list. Elements that aren't objects are skipped,
    /// and anything but an array yields nothing.
    pub fn from_list(list: &ImageList) -> Vec<ImageDescriptor> {
        list.as_array()
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .filter_map(|item| ImageDescriptor::deserialize(item).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn thumbnail_url(&self, width: u32, height: u32) -> String {
        format!("{THUMBNAIL_BASE_URL}/{}/{width}/{height}", self.id)
    }

    /// A direct image URL at full size. `url` points at an HTML page, so it is never used here.
    pub fn full_size_url(&self) -> String {
        if self.download_url.is_empty() {
            self.thumbnail_url(self.width, self.height)
        } else {
            self.download_url.clone()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct HelloResponse {
    pub result: String,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self {
            result: HELLO_RESPONSE.to_string(),
        }
    }
}
