//! Web server module for the content service HTTP surface.
//!
//! This module provides a thin server that:
//! - Receives signed revalidation webhooks from the CMS
//! - Verifies the HMAC signature before any side effect
//! - Marks the affected cache tags stale
//! - Serves the sitemap and a health probe
//!
//! All page rendering happens in the site's rendering layer; this server
//! only owns the cache/SEO plumbing underneath it.

pub mod handlers;
pub mod signature;
pub mod sitemap;

pub use handlers::{
    health, revalidate_info, revalidate_webhook, AppState, ErrorResponse, HealthResponse,
    RevalidateInfo, RevalidateResponse,
};
pub use signature::{is_secret_configured, sign_body, verify_signature, SIGNATURE_HEADER};
pub use sitemap::{build_sitemap_xml, sitemap, sitemap_entries, SitemapEntry};
