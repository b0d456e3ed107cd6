//! Structured-data (SEO schema) builders.
//!
//! Pure functions mapping content documents to schema.org JSON-LD trees for
//! embedding in page output. Every builder is deterministic: fixed input
//! yields byte-identical serialized output, and no builder reads the clock.
//! Review and modification dates always come from the document itself.
//!
//! ## Builders
//!
//! ```text
//! Post         → article_schema / medical_web_page_schema / faq_schema
//! Video        → video_schema
//! SiteSettings → local_business_schema
//! nav trail    → breadcrumb_schema
//! ```

pub mod article;
pub mod breadcrumb;
pub mod business;
pub mod faq;
pub mod medical;
pub mod types;
pub mod video;

pub use article::{article_schema, ArticleSchema};
pub use breadcrumb::{breadcrumb_schema, BreadcrumbSchema, Crumb};
pub use business::{local_business_schema, LocalBusinessSchema};
pub use faq::{faq_schema, FaqSchema};
pub use medical::{medical_web_page_schema, MedicalWebPageSchema};
pub use types::{
    GeoCoordinates, ImageObject, Organization, PersonRef, PostalAddress, SCHEMA_CONTEXT,
    SITE_LANGUAGE,
};
pub use video::{duration_to_iso8601, video_schema, VideoSchema};

use serde::Serialize;
use url::Url;

/// Build the absolute canonical URL for a site-relative path.
pub fn canonical_url(site_url: &str, path: &str) -> String {
    match Url::parse(site_url).and_then(|base| base.join(path)) {
        Ok(joined) => joined.to_string(),
        // Unparseable origins only occur with broken configuration; fall
        // back to plain concatenation rather than failing a page render.
        Err(_) => format!(
            "{}/{}",
            site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
    }
}

/// Serialize a schema object into the `<script>` element embedded in page
/// output. Multiple schema objects coexist on one page as sibling tags.
pub fn to_script_tag<T: Serialize>(schema: &T) -> String {
    let json =
        serde_json::to_string_pretty(schema).unwrap_or_else(|_| "{}".to_string());
    format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        json
    )
}
