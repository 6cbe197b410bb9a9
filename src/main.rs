use crate::api::HttpListingsApi;
use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flatview=info")),
        )
        .init();

    // 1. Configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2. Backend client
    let api = match HttpListingsApi::new(config.endpoints.clone(), config.http_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!("Backend client initialization failed: {e}");
            std::process::exit(1);
        }
    };
    let app = App::new(Arc::new(api), config.rating_failure);

    // 3. Start the server
    info!(
        addr = %config.bind_addr,
        list = %config.endpoints.list,
        rating_failure = ?config.rating_failure,
        "starting server"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            info!(status = err.status(), "request failed: {err}");
            responses::error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
