//! Webhook payload typing and cache-tag dispatch.
//!
//! The CMS notifies the site when a document changes. The notification body
//! is untrusted input; it is deserialized into [`WebhookPayload`] at the
//! boundary before any branching logic runs. [`tags_for`] then maps the
//! document type to the cache tags that must be invalidated.
//!
//! ## Flow
//!
//! ```text
//! raw body → WebhookPayload → tags_for() → TagCache::invalidate per tag
//! ```

use serde::{Deserialize, Serialize};

use crate::content::Slug;

/// Document type discriminator carried in the webhook `_type` field.
///
/// Unknown types fall into [`DocumentKind::Other`] so a new content type in
/// the CMS never breaks the webhook sender's integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Post,
    Video,
    Author,
    Category,
    SiteSettings,
    #[serde(untagged)]
    Other(String),
}

impl DocumentKind {
    /// The wire name of the document type.
    pub fn as_str(&self) -> &str {
        match self {
            DocumentKind::Post => "post",
            DocumentKind::Video => "video",
            DocumentKind::Author => "author",
            DocumentKind::Category => "category",
            DocumentKind::SiteSettings => "siteSettings",
            DocumentKind::Other(name) => name,
        }
    }
}

/// Signed change-notification body sent by the CMS.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "_type")]
    pub kind: DocumentKind,
    #[serde(default)]
    pub slug: Option<Slug>,
}

/// Map a changed document to the cache tags that depend on it.
///
/// Pure and deterministic: identical inputs always yield the identical tag
/// list, which keeps invalidation idempotent under at-least-once webhook
/// delivery. Authors and categories only surface embedded in post listings,
/// so both map to the `posts` tag.
pub fn tags_for(kind: &DocumentKind, slug: Option<&str>) -> Vec<String> {
    match kind {
        DocumentKind::Post => {
            let mut tags = vec!["posts".to_string()];
            if let Some(slug) = slug {
                tags.push(format!("post:{}", slug));
            }
            tags
        }
        DocumentKind::Video => {
            let mut tags = vec!["videos".to_string()];
            if let Some(slug) = slug {
                tags.push(format!("video:{}", slug));
            }
            tags
        }
        DocumentKind::Author | DocumentKind::Category => vec!["posts".to_string()],
        DocumentKind::SiteSettings => vec!["siteSettings".to_string()],
        DocumentKind::Other(_) => Vec::new(),
    }
}
