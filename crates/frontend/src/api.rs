use servicemap_shared::error::DataLoadError;
use servicemap_shared::models::ServiceCenter;
use servicemap_shared::normalize::parse_dataset;

/// Dataset file, resolved against the page URL like `./service_centers.json`.
pub const DATASET_FILE: &str = "service_centers.json";

/// Resolve the dataset URL from the page's `href`, dropping query and fragment.
pub fn dataset_url_from(page_href: &str) -> String {
    let base = page_href.split(['?', '#']).next().unwrap_or(page_href);
    match base.rfind('/') {
        Some(slash) => format!("{}{}", &base[..=slash], DATASET_FILE),
        None => format!("./{}", DATASET_FILE),
    }
}

/// Dataset URL for an optional page `href`; no `href` means there is no page to resolve against.
fn resolve_dataset_url(page_href: Option<String>) -> Result<String, DataLoadError> {
    page_href
        .map(|href| dataset_url_from(&href))
        .ok_or(DataLoadError::NoPageLocation)
}

fn dataset_url() -> Result<String, DataLoadError> {
    resolve_dataset_url(web_sys::window().and_then(|w| w.location().href().ok()))
}

async fn load(url: &str) -> Result<Vec<ServiceCenter>, DataLoadError> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| DataLoadError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(DataLoadError::Status(status.as_u16()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| DataLoadError::Network(e.to_string()))?;
    parse_dataset(&body)
}

/// Fetch and normalize the dataset. Called once, before any control is wired.
pub async fn fetch_service_centers() -> Result<Vec<ServiceCenter>, DataLoadError> {
    let url = dataset_url()?;
    let result = load(&url).await;
    match &result {
        Ok(centers) => tracing::info!(records = centers.len(), %url, "Loaded service centers"),
        Err(err) => tracing::error!(error = %err, %url, "Failed to load service centers"),
    }
    result
}
