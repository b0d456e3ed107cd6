//! `VideoObject` schema for embedded educational videos.

use serde::Serialize;

use crate::content::{SiteSettings, Video};

use super::business::publisher_from;
use super::canonical_url;
use super::types::{Organization, SCHEMA_CONTEXT, SITE_LANGUAGE};

/// `VideoObject` JSON-LD root object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub thumbnail_url: String,
    pub embed_url: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub publisher: Organization,
    pub in_language: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// Convert a free-text duration (`"M:SS"` or `"H:MM:SS"`) into ISO-8601
/// notation (`PT#H#M#S`), omitting zero components. Returns `None` for
/// anything unparseable.
pub fn duration_to_iso8601(raw: &str) -> Option<String> {
    let parts: Vec<u32> = raw
        .trim()
        .split(':')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<Vec<u32>>>()?;

    let (hours, minutes, seconds) = match parts.as_slice() {
        [minutes, seconds] => (0, *minutes, *seconds),
        [hours, minutes, seconds] => (*hours, *minutes, *seconds),
        _ => return None,
    };

    let mut iso = String::from("PT");
    if hours > 0 {
        iso.push_str(&format!("{}H", hours));
    }
    if minutes > 0 {
        iso.push_str(&format!("{}M", minutes));
    }
    if seconds > 0 {
        iso.push_str(&format!("{}S", seconds));
    }
    if iso == "PT" {
        iso.push_str("0S");
    }

    Some(iso)
}

/// Build the `VideoObject` schema for a video document.
///
/// Thumbnail priority: the editor-supplied custom thumbnail, then the
/// platform default for the embedded id.
pub fn video_schema(video: &Video, settings: Option<&SiteSettings>, site_url: &str) -> VideoSchema {
    let thumbnail_url = video.thumbnail_url.clone().unwrap_or_else(|| {
        format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video.youtube_id)
    });

    VideoSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "VideoObject",
        name: video.title.clone(),
        description: video.description.clone(),
        thumbnail_url,
        embed_url: format!("https://www.youtube.com/embed/{}", video.youtube_id),
        url: canonical_url(site_url, &format!("/videos/{}", video.slug.current)),
        upload_date: video.published_at.clone(),
        duration: video
            .duration
            .as_deref()
            .and_then(duration_to_iso8601),
        publisher: publisher_from(settings),
        in_language: SITE_LANGUAGE,
        keywords: video.tags.clone(),
    }
}
