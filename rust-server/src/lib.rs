//! VidaMed - content service for the clinic's marketing site.
//!
//! This library provides the non-presentation logic behind the site:
//! - `web`: revalidation webhook, sitemap and health endpoints
//! - `seo`: schema.org JSON-LD builders embedded in page output
//! - `sanity`: async GROQ client for the headless CMS
//! - `cache`: stale-tag registry driving page regeneration
//!
//! ## Architecture
//!
//! ```text
//! CMS change → signed webhook → tags_for() → TagCache
//! page render → SanityClient → seo builders → <script type="application/ld+json">
//! ```

pub mod cache;
pub mod config;
pub mod content;
pub mod revalidate;
pub mod sanity;
pub mod seo;
pub mod web;

// Re-export commonly used types
pub use cache::TagCache;
pub use config::Config;
pub use content::ContentDocument;
pub use revalidate::{tags_for, DocumentKind, WebhookPayload};
pub use sanity::{ContentError, SanityClient};
pub use web::AppState;
