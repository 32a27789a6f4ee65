mod config;
mod dataset;
mod error;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

use config::HostConfig;
use error::HostError;

/// Path the page fetches the dataset from, relative to the document.
const DATASET_ROUTE: &str = "/service_centers.json";

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";
const CACHE_NO_STORE: &str = "no-store";

fn cache_layer(value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(CACHE_CONTROL, HeaderValue::from_static(value))
}

/// Build a cache-controlled static file router.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(cache_layer(cache_header))
}

/// The dataset is edited in place, so every page load must see the current file.
fn dataset_router(data_path: &Path) -> Router {
    Router::new()
        .route_service(DATASET_ROUTE, ServeFile::new(data_path))
        .layer(cache_layer(CACHE_NO_STORE))
}

fn build_app(config: &HostConfig) -> Router {
    let static_files = Router::new()
        .nest(
            "/static",
            cached_static_router(&config.assets_dir, CACHE_1DAY),
        )
        .nest(
            "/dist",
            cached_static_router(&config.dist_dir, CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(&config.dist_dir.join("assets"), CACHE_IMMUTABLE),
        );

    Router::new()
        .route("/", get(serve_index))
        .with_state(Arc::new(config.dist_dir.clone()))
        .merge(dataset_router(&config.data_path))
        .merge(static_files)
        .layer(CompressionLayer::new())
}

async fn serve_index(State(dist_dir): State<Arc<PathBuf>>) -> Html<String> {
    match tokio::fs::read_to_string(dist_dir.join("index.html")).await {
        Ok(html) => Html(html),
        Err(err) => {
            tracing::warn!(error = %err, dir = %dist_dir.display(), "No built index.html, serving placeholder");
            Html(
                r#"<!DOCTYPE html>
<html>
<head><title>Service Center Map</title></head>
<body>
<h1>Service Center Map</h1>
<p>Frontend not built yet. Run <code>dx bundle</code> in crates/frontend and point DIST_DIR at the output.</p>
</body>
</html>"#
                    .to_string(),
            )
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    dataset::validate(&config.data_path)?;

    let app = build_app(&config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;
    tracing::info!("Server running at http://localhost:{}", config.port);

    axum::serve(listener, app).await.map_err(HostError::Serve)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Host exited");
            ExitCode::FAILURE
        }
    }
}
