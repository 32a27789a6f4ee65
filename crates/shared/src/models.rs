use serde::Deserialize;

/// Stable per-session identity of a service center.
pub type CenterId = u64;

/// A region or branch identifier as it appears in the dataset.
///
/// The source data mixes numbers and strings for these fields, so both are
/// kept verbatim and only ever rendered as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Number(serde_json::Number),
    Text(String),
}

impl Tag {
    /// True for the values a display should treat as "no value": `0` and `""`.
    pub fn is_blank(&self) -> bool {
        match self {
            Tag::Number(n) => n.as_f64() == Some(0.0),
            Tag::Text(s) => s.is_empty(),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Number(n) => write!(f, "{}", n),
            Tag::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Marker location as percentages of the map container's box.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl Default for Position {
    fn default() -> Self {
        Position {
            x_percent: 50.0,
            y_percent: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCenter {
    pub id: CenterId,
    pub brand_name: String,
    pub service_center: String,
    pub full_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub region: Option<Tag>,
    pub branch_number: Option<Tag>,
    pub services: Vec<String>,
    pub is_support_center: bool,
    pub position: Position,
}
