//! Shared schema.org node types used across the JSON-LD builders.
//!
//! These are plain serializable structs; optional fields carry
//! `skip_serializing_if` so absent data is omitted from the output tree
//! entirely instead of serializing as `null`.

use serde::Serialize;

use crate::content::Author;

/// The schema.org vocabulary context embedded in every root object.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Content language of the site.
pub const SITE_LANGUAGE: &str = "pt-BR";

/// A `Person` node, upgraded to `Physician` for licensed professionals.
#[derive(Debug, Clone, Serialize)]
pub struct PersonRef {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    /// Professional-license identifier (CRM) for physicians.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl PersonRef {
    /// Build the node for an author, typed by their professional status.
    pub fn from_author(author: &Author) -> Self {
        if author.is_medical_professional {
            Self::physician(author)
        } else {
            Self {
                schema_type: "Person",
                name: author.name.clone(),
                identifier: None,
            }
        }
    }

    /// Build a `Physician` node carrying the CRM identifier when present.
    pub fn physician(author: &Author) -> Self {
        Self {
            schema_type: "Physician",
            name: author.name.clone(),
            identifier: author.crm.as_ref().map(|crm| format!("CRM {}", crm)),
        }
    }
}

/// An `Organization` node for the publisher.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

/// An `ImageObject` node.
#[derive(Debug, Clone, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            schema_type: "ImageObject",
            url: url.into(),
        }
    }
}

/// A `PostalAddress` node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: &'static str,
}

/// A `GeoCoordinates` node.
#[derive(Debug, Clone, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}
