//! Thin GROQ query client for the headless CMS.
//!
//! The client is explicitly constructed from [`Config`] and passed where it
//! is needed; there is no process-wide singleton, so tests can build one
//! against any base URL without global state.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::content::{Post, SiteSettings, Video};

/// Errors surfaced by the content-fetch client.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode content response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid content API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Which view of the content lake queries read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// Published documents only
    Published,
    /// Drafts overlaid on published documents; requires a read token
    PreviewDrafts,
}

impl Perspective {
    fn as_str(self) -> &'static str {
        match self {
            Perspective::Published => "published",
            Perspective::PreviewDrafts => "previewDrafts",
        }
    }
}

/// GROQ projection shared by single-post and listing queries.
const POST_FIELDS: &str = r#"{
  _id, title, slug, excerpt, seo, publishedAt, _updatedAt, tags, readingTime, faq, body,
  "author": author->{_id, name, slug, crm, isMedicalProfessional},
  "mainImageUrl": mainImage.asset->url,
  "medicalCompliance": medicalCompliance{
    reviewedByMedical, lastReviewedAt,
    "reviewedBy": reviewedBy->{_id, name, crm, isMedicalProfessional}
  }
}"#;

const VIDEO_FIELDS: &str = r#"{
  _id, title, slug, description, youtubeId, duration, publishedAt, _updatedAt, tags,
  "thumbnailUrl": thumbnail.asset->url
}"#;

/// Slug plus last-modified pair, as listed for the sitemap.
#[derive(Debug, Clone, Deserialize)]
pub struct SlugEntry {
    pub slug: String,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Async CMS query client.
///
/// Cloning is cheap; clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct SanityClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: Client,
    base_url: Url,
    token: Option<String>,
    perspective: Perspective,
}

impl SanityClient {
    /// Build a client for the published perspective.
    pub fn new(config: &Config) -> Result<Self, ContentError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        // The CDN edge does not accept authenticated requests, so a token
        // always routes to the live API host.
        let host = if config.sanity_use_cdn && config.sanity_token.is_none() {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };

        let base_url = Url::parse(&format!(
            "https://{}.{}/v{}/data/query/{}",
            config.sanity_project_id, host, config.sanity_api_version, config.sanity_dataset
        ))?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                token: config.sanity_token.clone(),
                perspective: Perspective::Published,
            }),
        })
    }

    /// A copy of this client reading the draft/preview perspective.
    ///
    /// Only meaningful when a read token is configured; without one the CMS
    /// serves the published view regardless.
    pub fn with_preview(&self) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: self.inner.http.clone(),
                base_url: self.inner.base_url.clone(),
                token: self.inner.token.clone(),
                perspective: Perspective::PreviewDrafts,
            }),
        }
    }

    /// The perspective this client reads from.
    pub fn perspective(&self) -> Perspective {
        self.inner.perspective
    }

    /// The query endpoint this client targets.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Run a GROQ query with named `$parameters` and decode the result.
    pub async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ContentError> {
        let mut request = self
            .inner
            .http
            .get(self.inner.base_url.clone())
            .query(&[("query", groq)])
            .query(&[("perspective", self.inner.perspective.as_str())]);

        for (name, value) in params {
            // GROQ parameters are passed as JSON literals named `$param`.
            request = request.query(&[(format!("${}", name), format!("\"{}\"", value))]);
        }

        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ContentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            status = status.as_u16(),
            body_length = body.len(),
            "content_query_ok"
        );

        let envelope: QueryResponse<T> = serde_json::from_str(&body)?;
        Ok(envelope.result)
    }

    /// Fetch a single post by slug; `None` when no such post exists.
    pub async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        let groq = format!(
            "*[_type == \"post\" && slug.current == $slug][0]{}",
            POST_FIELDS
        );
        self.query(&groq, &[("slug", slug)]).await
    }

    /// Fetch a single video by slug; `None` when no such video exists.
    pub async fn video_by_slug(&self, slug: &str) -> Result<Option<Video>, ContentError> {
        let groq = format!(
            "*[_type == \"video\" && slug.current == $slug][0]{}",
            VIDEO_FIELDS
        );
        self.query(&groq, &[("slug", slug)]).await
    }

    /// Fetch the singleton site settings document; `None` before first publish.
    pub async fn site_settings(&self) -> Result<Option<SiteSettings>, ContentError> {
        self.query("*[_type == \"siteSettings\"][0]", &[]).await
    }

    /// List published post slugs with their last-modified timestamps.
    pub async fn post_slugs(&self) -> Result<Vec<SlugEntry>, ContentError> {
        self.query(
            "*[_type == \"post\" && defined(slug.current)]{\"slug\": slug.current, \"updatedAt\": _updatedAt}",
            &[],
        )
        .await
    }

    /// List published video slugs with their last-modified timestamps.
    pub async fn video_slugs(&self) -> Result<Vec<SlugEntry>, ContentError> {
        self.query(
            "*[_type == \"video\" && defined(slug.current)]{\"slug\": slug.current, \"updatedAt\": _updatedAt}",
            &[],
        )
        .await
    }
}
