//! Sitemap endpoint.
//!
//! Assembles `/sitemap.xml` from the static routes plus the slug listings
//! fetched through the content client. The XML assembly itself is a pure
//! function over the entry list; only the slug fetch touches the network.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::sanity::SlugEntry;
use crate::seo::canonical_url;
use crate::web::handlers::{AppState, ErrorResponse};

/// Site-relative routes that exist independent of CMS content.
const STATIC_ROUTES: &[&str] = &["/", "/blog", "/videos", "/sobre", "/contato"];

/// One `<url>` element of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<String>,
}

/// Assemble the full entry list: static routes first, then blog posts and
/// videos in listing order.
pub fn sitemap_entries(
    site_url: &str,
    posts: &[SlugEntry],
    videos: &[SlugEntry],
) -> Vec<SitemapEntry> {
    let mut entries: Vec<SitemapEntry> = STATIC_ROUTES
        .iter()
        .map(|route| SitemapEntry {
            loc: canonical_url(site_url, route),
            lastmod: None,
        })
        .collect();

    entries.extend(posts.iter().map(|post| SitemapEntry {
        loc: canonical_url(site_url, &format!("/blog/{}", post.slug)),
        lastmod: post.updated_at.clone(),
    }));

    entries.extend(videos.iter().map(|video| SitemapEntry {
        loc: canonical_url(site_url, &format!("/videos/{}", video.slug)),
        lastmod: video.updated_at.clone(),
    }));

    entries
}

/// Render the entry list as sitemap-protocol XML.
pub fn build_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", entry.loc));
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Sitemap endpoint handler.
pub async fn sitemap(State(state): State<AppState>) -> Response {
    let fetched = tokio::try_join!(state.content.post_slugs(), state.content.video_slugs());

    let (posts, videos) = match fetched {
        Ok(pair) => pair,
        Err(e) => {
            error!(error = %e, "sitemap_fetch_failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Erro ao gerar o sitemap".to_string(),
                    error: Some(e.to_string()),
                }),
            )
                .into_response();
        }
    };

    let entries = sitemap_entries(&state.config.site_url, &posts, &videos);
    info!(entry_count = entries.len(), "sitemap_generated");

    (
        [(header::CONTENT_TYPE, "application/xml")],
        build_sitemap_xml(&entries),
    )
        .into_response()
}
