use thiserror::Error;

/// Shown to the user whenever the dataset cannot be loaded.
pub const LOAD_FAILURE_HINT: &str = "Failed to load data. If you are opening index.html directly, \
use a local server (or deploy to GitHub Pages/Netlify).";

/// Failure of the one-shot startup load of the service center dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The server answered with a non-success status.
    #[error("could not load service_centers.json ({0})")]
    Status(u16),

    /// The request never produced a response (offline, CORS, `file://`).
    #[error("network error while loading service_centers.json: {0}")]
    Network(String),

    #[error("service_centers.json is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("service_centers.json must contain a JSON array of records")]
    NotAnArray,

    /// The page URL could not be read, so there is nothing to resolve against.
    #[error("page location is unavailable")]
    NoPageLocation,
}

impl DataLoadError {
    /// User-facing text for the blocking notification.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_HINT
    }
}
