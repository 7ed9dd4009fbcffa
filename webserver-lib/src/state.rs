use std::path::PathBuf;

use common::config::WebPageConfig;

#[derive(Debug, Clone)]
pub struct ServerState {
    pub dist_dir: PathBuf,
    /// The web page config, already rendered as TOML
    pub config_toml: String,
}

impl ServerState {
    pub fn new(dist_dir: PathBuf, config: &WebPageConfig) -> Result<Self, toml::ser::Error> {
        Ok(Self {
            dist_dir,
            config_toml: config.to_toml_string()?,
        })
    }
}
