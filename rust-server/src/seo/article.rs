//! `Article` schema for blog posts.

use serde::Serialize;

use crate::content::{Post, SiteSettings};

use super::business::{publisher_from, DEFAULT_CLINIC_NAME};
use super::types::{ImageObject, Organization, PersonRef, SCHEMA_CONTEXT, SITE_LANGUAGE};
use super::canonical_url;

/// `Article` JSON-LD root object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub author: PersonRef,
    pub publisher: Organization,
    pub main_entity_of_page: String,
    pub url: String,
    pub in_language: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Estimated reading time in ISO-8601 duration notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<PersonRef>,
}

/// Build the `Article` schema for a post.
///
/// The description falls back from the dedicated SEO field to the excerpt.
/// Publication dates come from the document itself, never from the clock.
/// The `reviewedBy` physician only appears for medically reviewed posts.
pub fn article_schema(
    post: &Post,
    settings: Option<&SiteSettings>,
    site_url: &str,
) -> ArticleSchema {
    let url = canonical_url(site_url, &format!("/blog/{}", post.slug.current));

    let description = post
        .seo
        .as_ref()
        .and_then(|seo| seo.meta_description.clone())
        .or_else(|| post.excerpt.clone());

    let author = post
        .author
        .as_ref()
        .map(PersonRef::from_author)
        .unwrap_or_else(|| PersonRef {
            schema_type: "Person",
            name: settings
                .and_then(|s| s.clinic_name.clone())
                .unwrap_or_else(|| DEFAULT_CLINIC_NAME.to_string()),
            identifier: None,
        });

    let reviewed_by = post
        .medical_compliance
        .as_ref()
        .filter(|compliance| compliance.reviewed_by_medical)
        .and_then(|compliance| compliance.reviewed_by.as_ref())
        .map(PersonRef::physician);

    ArticleSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "Article",
        headline: post.title.clone(),
        description,
        author,
        publisher: publisher_from(settings),
        main_entity_of_page: url.clone(),
        url,
        in_language: SITE_LANGUAGE,
        image: post.main_image_url.clone().map(ImageObject::new),
        date_published: post.published_at.clone(),
        date_modified: post.updated_at.clone(),
        keywords: post.tags.clone(),
        time_required: post.reading_time.map(|minutes| format!("PT{}M", minutes)),
        reviewed_by,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SITE_URL;
    use crate::content::{Author, MedicalCompliance, SeoFields, Slug};

    fn base_post() -> Post {
        Post {
            id: "post-1".to_string(),
            title: "Tratamentos para acne adulta".to_string(),
            slug: Slug::new("tratamentos-para-acne-adulta"),
            excerpt: Some("O que funciona segundo a evidência.".to_string()),
            seo: None,
            author: Some(Author {
                id: "author-1".to_string(),
                name: "Dra. Ana Martins".to_string(),
                slug: None,
                crm: Some("52-12345".to_string()),
                is_medical_professional: true,
                bio: None,
                avatar_url: None,
            }),
            published_at: Some("2024-01-15T09:00:00Z".to_string()),
            updated_at: Some("2024-02-01T12:30:00Z".to_string()),
            main_image_url: None,
            tags: vec!["acne".to_string(), "dermatologia".to_string()],
            reading_time: Some(7),
            medical_compliance: None,
            faq: vec![],
            body: vec![],
        }
    }

    #[test]
    fn test_article_schema_basics() {
        let schema = article_schema(&base_post(), None, DEFAULT_SITE_URL);

        assert_eq!(schema.schema_type, "Article");
        assert_eq!(schema.headline, "Tratamentos para acne adulta");
        assert_eq!(
            schema.url,
            "https://www.clinicavidamed.com.br/blog/tratamentos-para-acne-adulta"
        );
        assert_eq!(schema.author.schema_type, "Physician");
        assert_eq!(schema.publisher.name, DEFAULT_CLINIC_NAME);
        assert_eq!(schema.date_published.as_deref(), Some("2024-01-15T09:00:00Z"));
        assert_eq!(schema.time_required.as_deref(), Some("PT7M"));
    }

    #[test]
    fn test_description_prefers_seo_field_over_excerpt() {
        let mut post = base_post();
        post.seo = Some(SeoFields {
            meta_description: Some("Descrição otimizada.".to_string()),
            ..SeoFields::default()
        });

        let schema = article_schema(&post, None, DEFAULT_SITE_URL);
        assert_eq!(schema.description.as_deref(), Some("Descrição otimizada."));

        post.seo = None;
        let schema = article_schema(&post, None, DEFAULT_SITE_URL);
        assert_eq!(
            schema.description.as_deref(),
            Some("O que funciona segundo a evidência.")
        );
    }

    #[test]
    fn test_reviewed_by_omitted_when_not_medically_reviewed() {
        let mut post = base_post();
        post.medical_compliance = Some(MedicalCompliance {
            reviewed_by_medical: false,
            reviewed_by: Some(Author {
                id: "rev-1".to_string(),
                name: "Dr. Carlos Souza".to_string(),
                slug: None,
                crm: Some("52-67890".to_string()),
                is_medical_professional: true,
                bio: None,
                avatar_url: None,
            }),
            last_reviewed_at: None,
        });

        let schema = article_schema(&post, None, DEFAULT_SITE_URL);
        assert!(schema.reviewed_by.is_none());

        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("reviewedBy").is_none());
    }

    #[test]
    fn test_reviewed_by_is_physician_when_reviewed() {
        let mut post = base_post();
        post.medical_compliance = Some(MedicalCompliance {
            reviewed_by_medical: true,
            reviewed_by: Some(Author {
                id: "rev-1".to_string(),
                name: "Dr. Carlos Souza".to_string(),
                slug: None,
                crm: Some("52-67890".to_string()),
                is_medical_professional: true,
                bio: None,
                avatar_url: None,
            }),
            last_reviewed_at: Some("2024-03-01".to_string()),
        });

        let schema = article_schema(&post, None, DEFAULT_SITE_URL);
        let reviewed_by = schema.reviewed_by.expect("physician expected");
        assert_eq!(reviewed_by.schema_type, "Physician");
        assert_eq!(reviewed_by.identifier.as_deref(), Some("CRM 52-67890"));
    }

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let mut post = base_post();
        post.excerpt = None;
        post.tags = vec![];
        post.reading_time = None;
        post.published_at = None;
        post.updated_at = None;

        let json = serde_json::to_value(&article_schema(&post, None, DEFAULT_SITE_URL)).unwrap();

        for field in [
            "description",
            "keywords",
            "timeRequired",
            "datePublished",
            "dateModified",
            "image",
            "reviewedBy",
        ] {
            assert!(json.get(field).is_none(), "{} should be omitted", field);
        }
    }

    #[test]
    fn test_deterministic_serialization() {
        let post = base_post();
        let a = serde_json::to_string(&article_schema(&post, None, DEFAULT_SITE_URL)).unwrap();
        let b = serde_json::to_string(&article_schema(&post, None, DEFAULT_SITE_URL)).unwrap();
        assert_eq!(a, b);
    }
}
