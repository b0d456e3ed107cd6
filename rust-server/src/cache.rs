//! In-process stale-tag registry backing page revalidation.
//!
//! Pre-rendered pages register under cache tags (`posts`, `post:<slug>`,
//! `videos`, `siteSettings`). The revalidation webhook marks tags stale; the
//! rendering layer regenerates a page on its next request when any of its
//! tags is stale, then refreshes the tag.
//!
//! Invalidation is idempotent and monotonic: marking an already-stale tag is
//! a no-op, so duplicate or re-ordered webhook deliveries are harmless.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

/// Shared tag cache with interior mutability.
///
/// Cloning is cheap; all clones observe the same tag set.
#[derive(Clone, Default)]
pub struct TagCache {
    stale: Arc<RwLock<HashSet<String>>>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every page registered under `tag` as stale.
    ///
    /// Returns `true` when the tag transitioned to stale, `false` when it
    /// already was (the call is still a success).
    pub async fn invalidate(&self, tag: &str) -> bool {
        let mut stale = self.stale.write().await;
        let newly_stale = stale.insert(tag.to_string());

        if newly_stale {
            info!(tag = %tag, "cache_tag_invalidated");
        } else {
            debug!(tag = %tag, "cache_tag_already_stale");
        }

        newly_stale
    }

    /// Whether pages under `tag` must be regenerated.
    pub async fn is_stale(&self, tag: &str) -> bool {
        self.stale.read().await.contains(tag)
    }

    /// Clear a tag after the rendering layer regenerated its pages.
    ///
    /// Returns `true` when the tag was stale.
    pub async fn refresh(&self, tag: &str) -> bool {
        let removed = self.stale.write().await.remove(tag);
        if removed {
            debug!(tag = %tag, "cache_tag_refreshed");
        }
        removed
    }

    /// Snapshot of the currently stale tags, sorted for stable output.
    pub async fn stale_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.stale.read().await.iter().cloned().collect();
        tags.sort();
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalidate_marks_tag_stale() {
        let cache = TagCache::new();

        assert!(!cache.is_stale("posts").await);
        assert!(cache.invalidate("posts").await);
        assert!(cache.is_stale("posts").await);
    }

    #[tokio::test]
    async fn test_invalidate_is_idempotent() {
        let cache = TagCache::new();

        assert!(cache.invalidate("posts").await);
        assert!(!cache.invalidate("posts").await);

        // Same final state as a single invalidation.
        assert_eq!(cache.stale_tags().await, vec!["posts".to_string()]);
    }

    #[tokio::test]
    async fn test_refresh_clears_tag() {
        let cache = TagCache::new();

        cache.invalidate("post:protetor-solar").await;
        assert!(cache.refresh("post:protetor-solar").await);
        assert!(!cache.is_stale("post:protetor-solar").await);

        // Refreshing a fresh tag is a no-op.
        assert!(!cache.refresh("post:protetor-solar").await);
    }

    #[tokio::test]
    async fn test_stale_tags_sorted() {
        let cache = TagCache::new();

        cache.invalidate("videos").await;
        cache.invalidate("posts").await;
        cache.invalidate("post:acne").await;

        assert_eq!(
            cache.stale_tags().await,
            vec![
                "post:acne".to_string(),
                "posts".to_string(),
                "videos".to_string()
            ]
        );
    }
}
