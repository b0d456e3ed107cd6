//! Content document types mirroring the CMS content lake.
//!
//! Field names follow the CMS document shape (`_id`, `_type`, `_updatedAt`,
//! `slug.current`), mapped to Rust naming via serde renames. Documents are
//! request-scoped: they are deserialized from a query response or a webhook
//! payload, consumed, and dropped. Nothing here is persisted locally.

use serde::{Deserialize, Serialize};

/// URL path segment, unique per document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

// =============================================================================
// Portable Text
// =============================================================================

/// A single text span inside a portable-text block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
}

/// Minimal portable-text block: only the pieces the plain-text rendering
/// needs. Marks, styles and custom block types are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub children: Vec<Span>,
}

/// Flatten portable-text blocks into plain text, one paragraph per block.
pub fn blocks_to_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| {
            block
                .children
                .iter()
                .map(|span| span.text.as_str())
                .collect::<String>()
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

// =============================================================================
// Documents
// =============================================================================

/// Blog post or educational article author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    /// CRM registration (Conselho Regional de Medicina), present for
    /// licensed physicians.
    #[serde(default)]
    pub crm: Option<String>,
    #[serde(default, rename = "isMedicalProfessional")]
    pub is_medical_professional: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

/// Dedicated SEO overrides editors can set per document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoFields {
    #[serde(default, rename = "metaTitle")]
    pub meta_title: Option<String>,
    #[serde(default, rename = "metaDescription")]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Medical review state of an article. Articles making medical claims must
/// be reviewed by a licensed professional before they may be marked up as
/// reviewed content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalCompliance {
    #[serde(default, rename = "reviewedByMedical")]
    pub reviewed_by_medical: bool,
    #[serde(default, rename = "reviewedBy")]
    pub reviewed_by: Option<Author>,
    #[serde(default, rename = "lastReviewedAt")]
    pub last_reviewed_at: Option<String>,
}

/// One question/answer pair attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    #[serde(default)]
    pub answer: Vec<Block>,
}

/// Blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub seo: Option<SeoFields>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default, rename = "_updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default, rename = "mainImageUrl")]
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Estimated reading time in minutes.
    #[serde(default, rename = "readingTime")]
    pub reading_time: Option<u32>,
    #[serde(default, rename = "medicalCompliance")]
    pub medical_compliance: Option<MedicalCompliance>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    #[serde(default)]
    pub body: Vec<Block>,
}

/// Educational video embedded from YouTube.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "youtubeId")]
    pub youtube_id: String,
    /// Editor-supplied thumbnail; falls back to the platform default.
    #[serde(default, rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
    /// Free-text duration as entered by editors: "M:SS" or "H:MM:SS".
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default, rename = "_updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Blog category. Categories only surface inside post listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
}

/// Street address of the clinic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, rename = "postalCode")]
    pub postal_code: Option<String>,
}

/// Geographic coordinates of the clinic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Singleton site-wide settings document.
///
/// Every field is optional so a half-filled settings document never breaks
/// consumers; the SEO builders merge in fixed defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default, rename = "clinicName")]
    pub clinic_name: Option<String>,
    #[serde(default, rename = "logoUrl")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub geo: Option<GeoPoint>,
    /// Opening hours in schema.org notation, e.g. "Mo-Fr 08:00-18:00".
    #[serde(default, rename = "openingHours")]
    pub opening_hours: Vec<String>,
    #[serde(default, rename = "socialProfiles")]
    pub social_profiles: Vec<String>,
    #[serde(default, rename = "defaultSeoDescription")]
    pub default_seo_description: Option<String>,
}

/// Tagged union over every document type the CMS delivers.
///
/// The `_type` discriminator matches the CMS schema names, so a raw query
/// result or webhook body deserializes straight into the right variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ContentDocument {
    #[serde(rename = "post")]
    Post(Post),
    #[serde(rename = "video")]
    Video(Video),
    #[serde(rename = "author")]
    Author(Author),
    #[serde(rename = "category")]
    Category(Category),
    #[serde(rename = "siteSettings")]
    SiteSettings(SiteSettings),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_document_post_round_trip() {
        let json = r#"{
            "_type": "post",
            "_id": "post-1",
            "title": "Cuidados com a pele no verão",
            "slug": { "current": "cuidados-com-a-pele-no-verao" },
            "excerpt": "Dicas práticas de proteção solar.",
            "publishedAt": "2024-01-15T09:00:00Z",
            "_updatedAt": "2024-02-01T12:30:00Z",
            "tags": ["dermatologia", "verão"]
        }"#;

        let doc: ContentDocument = serde_json::from_str(json).unwrap();
        match &doc {
            ContentDocument::Post(post) => {
                assert_eq!(post.id, "post-1");
                assert_eq!(post.slug.current, "cuidados-com-a-pele-no-verao");
                assert_eq!(post.tags.len(), 2);
                assert!(post.author.is_none());
            }
            _ => panic!("Expected Post variant"),
        }

        let serialized = serde_json::to_string(&doc).unwrap();
        assert!(serialized.contains("\"_type\":\"post\""));
    }

    #[test]
    fn test_content_document_site_settings() {
        let json = r#"{ "_type": "siteSettings", "clinicName": "Clínica VidaMed" }"#;
        let doc: ContentDocument = serde_json::from_str(json).unwrap();
        match doc {
            ContentDocument::SiteSettings(settings) => {
                assert_eq!(settings.clinic_name.as_deref(), Some("Clínica VidaMed"));
                assert!(settings.address.is_none());
            }
            _ => panic!("Expected SiteSettings variant"),
        }
    }

    #[test]
    fn test_blocks_to_plain_text() {
        let blocks = vec![
            Block {
                children: vec![
                    Span {
                        text: "A proteção solar ".to_string(),
                    },
                    Span {
                        text: "deve ser diária.".to_string(),
                    },
                ],
            },
            Block { children: vec![] },
            Block {
                children: vec![Span {
                    text: "Reaplique a cada 3 horas.".to_string(),
                }],
            },
        ];

        assert_eq!(
            blocks_to_plain_text(&blocks),
            "A proteção solar deve ser diária.\n\nReaplique a cada 3 horas."
        );
    }

    #[test]
    fn test_blocks_to_plain_text_empty() {
        assert_eq!(blocks_to_plain_text(&[]), "");
    }
}
