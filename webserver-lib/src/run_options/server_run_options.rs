use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use clap::Parser;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:6688";
const DEFAULT_DIST_DIR: &str = "frontend/dist";

#[derive(Parser, Clone, Debug, Default)]
pub struct ServerRunOptions {
    /// The address, at which the server will bind to
    #[clap(long, value_name = "ADDR")]
    bind_address: Option<SocketAddr>,

    /// Web page config file path, served to the front end. Live mode is served if absent.
    #[clap(long, value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Directory holding the built front end (the output of `trunk build`)
    #[clap(long, value_name = "PATH")]
    dist_dir: Option<PathBuf>,
}

impl ServerRunOptions {
    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address.unwrap_or(
            DEFAULT_BIND_ADDRESS
                .parse::<SocketAddr>()
                .expect("Must succeed"),
        )
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn dist_dir(&self) -> &Path {
        self.dist_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DIST_DIR))
    }
}
