use std::collections::HashSet;

use crate::models::ServiceCenter;

/// Brands with a legend swatch and marker color, in legend order.
pub const BRAND_CATALOG: [&str; 6] = [
    "Northwest Exterminating",
    "Carolina Pest Management",
    "Sawyer Exterminating",
    "Bug House Pest Control",
    "McCall Pest and Wildlife",
    "Volunteer Rid-A-Pest",
];

/// Derive a CSS-safe class fragment from a brand name.
///
/// Whitespace runs become `_`, then anything outside `[A-Za-z0-9_]` is dropped.
/// Distinct names can collide ("Rid-A-Pest" and "RidAPest"); that is accepted.
pub fn brand_class_name(brand_name: &str) -> String {
    let mut out = String::with_capacity(brand_name.len());
    let mut in_space = false;
    for c in brand_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        }
    }
    out
}

/// Full modifier class applied to markers, badges and swatches.
pub fn brand_css_class(brand_name: &str) -> String {
    format!("brand--{}", brand_class_name(brand_name))
}

/// Short tag shown in suggestion rows: the first word of the brand name.
pub fn brand_short_name(brand_name: &str) -> &str {
    brand_name.split(' ').next().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: &'static str,
    pub css_class: String,
}

/// Catalog brands that actually occur in the loaded data.
pub fn legend_entries(records: &[ServiceCenter]) -> Vec<LegendEntry> {
    let present: HashSet<&str> = records.iter().map(|c| c.brand_name.as_str()).collect();
    BRAND_CATALOG
        .iter()
        .filter(|name| present.contains(*name))
        .map(|&name| LegendEntry {
            name,
            css_class: brand_css_class(name),
        })
        .collect()
}
