//! `BreadcrumbList` schema for navigation trails.

use serde::Serialize;

use super::canonical_url;
use super::types::SCHEMA_CONTEXT;

/// One step of a navigation trail, root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// `BreadcrumbList` JSON-LD root object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub item_list_element: Vec<ListItem>,
}

/// A positional `ListItem` node.
#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

/// Build the `BreadcrumbList` schema for a navigation trail.
///
/// Positions are 1-based and strictly increasing with input order; item
/// URLs are made absolute against the site origin.
pub fn breadcrumb_schema(trail: &[Crumb], site_url: &str) -> BreadcrumbSchema {
    BreadcrumbSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element: trail
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem {
                schema_type: "ListItem",
                position: index + 1,
                name: crumb.name.clone(),
                item: canonical_url(site_url, &crumb.url),
            })
            .collect(),
    }
}
