pub mod run_options;
pub mod state;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, IntoMakeService},
    serve::Serve,
    Json, Router,
};
use common::{config::WebPageConfig, types::HelloResponse};
use hyper::{header, Method};
use run_options::server_run_options::ServerRunOptions;
use state::ServerState;
use tokio::net::TcpListener;
use tower_http_axum::{
    cors::{AllowMethods, CorsLayer},
    services::{ServeDir, ServeFile},
};

type StateType = Arc<ServerState>;

/// Where the front end looks for its runtime config
pub const CONFIG_ENDPOINT: &str = "/public/app-config.toml";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to load web page config from {0}: {1}")]
    ConfigLoad(PathBuf, String),
    #[error("Failed to render web page config: {0}")]
    ConfigRender(#[from] toml::ser::Error),
}

async fn hello() -> impl IntoResponse {
    Json::from(HelloResponse::default())
}

async fn app_config(State(state): State<StateType>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/toml")],
        state.config_toml.clone(),
    )
}

pub fn routes(state: ServerState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods(AllowMethods::list([Method::GET]))
        .allow_headers(tower_http_axum::cors::Any)
        .allow_origin(tower_http_axum::cors::Any);

    // Unknown paths get index.html, so the page survives reloads on any URL
    let static_files = ServeDir::new(&state.dist_dir)
        .fallback(ServeFile::new(state.dist_dir.join("index.html")));

    Router::new()
        .route("/hello", get(hello))
        .route(CONFIG_ENDPOINT, get(app_config))
        .with_state(Arc::new(state))
        .fallback_service(static_files)
        .layer(cors_layer)
        .layer(tower_http_axum::trace::TraceLayer::new_for_http())
}

fn web_server(socket: TcpListener, state: ServerState) -> Serve<IntoMakeService<Router>, Router> {
    axum::serve(socket, routes(state).into_make_service())
}

pub fn load_page_config(path: Option<&Path>) -> Result<WebPageConfig, Error> {
    match path {
        Some(p) => {
            let config = WebPageConfig::from_file(p)
                .map_err(|e| Error::ConfigLoad(p.to_path_buf(), e.to_string()))?;
            log::info!("Loaded web page config from {}", p.display());
            Ok(config)
        }
        None => {
            log::info!("No web page config given, serving live mode");
            Ok(WebPageConfig::default())
        }
    }
}

pub async fn start_server(options: ServerRunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = options.bind_address();

    let config = load_page_config(options.config_path())?;
    let state = ServerState::new(options.dist_dir().to_path_buf(), &config).map_err(Error::from)?;

    if !state.dist_dir.join("index.html").is_file() {
        log::warn!(
            "No index.html in {}. Build the front end with `trunk build` first.",
            state.dist_dir.display()
        );
    }

    let listener_socket = TcpListener::bind(bind_address).await?;

    log::info!("Server socket binding to {}", bind_address);

    web_server(listener_socket, state).await.map_err(Into::into)
}
