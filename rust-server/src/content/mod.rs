//! Content model module.
//!
//! This module defines the typed document shapes delivered by the headless
//! CMS, plus the portable-text plain-text rendering shared by the SEO
//! builders.

pub mod types;

pub use types::{
    blocks_to_plain_text, Address, Author, Block, Category, ContentDocument, FaqItem, GeoPoint,
    MedicalCompliance, Post, SeoFields, SiteSettings, Slug, Span, Video,
};
