use std::collections::BTreeSet;
use std::path::Path;

use servicemap_shared::normalize::parse_dataset;

use crate::error::HostError;

/// Counts reported once the dataset has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub records: usize,
    pub support_centers: usize,
    pub states: usize,
}

/// Read and parse the dataset the page will fetch. Called before binding.
pub fn validate(path: &Path) -> Result<DatasetSummary, HostError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| HostError::DatasetIo {
        path: display.clone(),
        source,
    })?;
    let centers = parse_dataset(&text).map_err(|source| HostError::Dataset {
        path: display,
        source,
    })?;

    let summary = DatasetSummary {
        records: centers.len(),
        support_centers: centers.iter().filter(|c| c.is_support_center).count(),
        states: centers
            .iter()
            .filter_map(|c| c.state.as_deref())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .len(),
    };
    tracing::info!(
        records = summary.records,
        support_centers = summary.support_centers,
        states = summary.states,
        "Loaded service center dataset"
    );
    Ok(summary)
}
