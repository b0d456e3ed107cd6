//! CMS query module.
//!
//! Provides the async GROQ client the rendering layer and the sitemap use
//! to fetch content documents and slug listings.

pub mod client;

pub use client::{ContentError, Perspective, SanityClient, SlugEntry};
