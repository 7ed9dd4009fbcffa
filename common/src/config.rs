use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MockSettings {
    /// Raw body handed back as if it came from the network. A built-in sample is used when absent.
    pub response_body: Option<String>,
    /// When set, every request fails with this message, as a connection error would.
    pub simulated_failure: Option<String>,
    /// A number in [0,1], the chance of a request failing at random
    pub error_probability: Option<f32>,
    pub delay_ms: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LiveOrMock {
    Live,
    Mock(MockSettings),
}

#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebPageConfig {
    pub mode: LiveOrMock,
}

impl Default for WebPageConfig {
    fn default() -> Self {
        Self {
            mode: LiveOrMock::Live,
        }
    }
}

impl WebPageConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<WebPageConfig, Box<dyn std::error::Error>> {
        let config_content = std::fs::read_to_string(path)?;
        Self::from_str(&config_content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

impl FromStr for WebPageConfig {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: WebPageConfig = toml::from_str(s)?;
        Ok(config)
    }
}
