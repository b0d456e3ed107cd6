//! `MedicalWebPage` schema, gated on medical review.
//!
//! Content making medical claims may only be marked up as reviewed after an
//! actual review by a licensed professional. The builder returns `None` for
//! anything else; there is no way to emit this schema for an unreviewed
//! post.

use serde::Serialize;

use crate::content::Post;

use super::canonical_url;
use super::types::{PersonRef, SCHEMA_CONTEXT, SITE_LANGUAGE};

/// `MedicalWebPage` JSON-LD root object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalWebPageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub in_language: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<PersonRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
}

/// Build the `MedicalWebPage` schema for a medically reviewed post.
///
/// Returns `None` unless `medicalCompliance.reviewedByMedical` is set.
pub fn medical_web_page_schema(post: &Post, site_url: &str) -> Option<MedicalWebPageSchema> {
    let compliance = post.medical_compliance.as_ref()?;
    if !compliance.reviewed_by_medical {
        return None;
    }

    Some(MedicalWebPageSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "MedicalWebPage",
        name: post.title.clone(),
        description: post.excerpt.clone(),
        url: canonical_url(site_url, &format!("/blog/{}", post.slug.current)),
        in_language: SITE_LANGUAGE,
        last_reviewed: compliance.last_reviewed_at.clone(),
        reviewed_by: compliance.reviewed_by.as_ref().map(PersonRef::physician),
        date_modified: post.updated_at.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SITE_URL;
    use crate::content::{Author, MedicalCompliance, Slug};

    fn post(compliance: Option<MedicalCompliance>) -> Post {
        Post {
            id: "post-1".to_string(),
            title: "Isotretinoína: indicações e riscos".to_string(),
            slug: Slug::new("isotretinoina-indicacoes-e-riscos"),
            excerpt: Some("Quando o tratamento é indicado.".to_string()),
            seo: None,
            author: None,
            published_at: None,
            updated_at: Some("2024-05-02T10:00:00Z".to_string()),
            main_image_url: None,
            tags: vec![],
            reading_time: None,
            medical_compliance: compliance,
            faq: vec![],
            body: vec![],
        }
    }

    #[test]
    fn test_no_compliance_block_yields_none() {
        assert!(medical_web_page_schema(&post(None), DEFAULT_SITE_URL).is_none());
    }

    #[test]
    fn test_unreviewed_post_yields_none() {
        let unreviewed = post(Some(MedicalCompliance {
            reviewed_by_medical: false,
            reviewed_by: None,
            last_reviewed_at: None,
        }));

        assert!(medical_web_page_schema(&unreviewed, DEFAULT_SITE_URL).is_none());
    }

    #[test]
    fn test_reviewed_post_carries_reviewer() {
        let reviewed = post(Some(MedicalCompliance {
            reviewed_by_medical: true,
            reviewed_by: Some(Author {
                id: "rev-1".to_string(),
                name: "Dra. Ana Martins".to_string(),
                slug: None,
                crm: Some("52-12345".to_string()),
                is_medical_professional: true,
                bio: None,
                avatar_url: None,
            }),
            last_reviewed_at: Some("2024-05-01".to_string()),
        }));

        let schema = medical_web_page_schema(&reviewed, DEFAULT_SITE_URL).expect("schema expected");
        assert_eq!(schema.schema_type, "MedicalWebPage");
        assert_eq!(schema.last_reviewed.as_deref(), Some("2024-05-01"));

        let reviewer = schema.reviewed_by.expect("reviewer expected");
        assert_eq!(reviewer.schema_type, "Physician");
        assert_eq!(reviewer.identifier.as_deref(), Some("CRM 52-12345"));
    }
}
