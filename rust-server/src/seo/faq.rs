//! `FAQPage` schema for question/answer sections.

use serde::Serialize;

use crate::content::{blocks_to_plain_text, FaqItem};

use super::types::SCHEMA_CONTEXT;

/// `FAQPage` JSON-LD root object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub main_entity: Vec<Question>,
}

/// A `Question` node with its accepted answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

/// An `Answer` node carrying the plain-text rendering of the portable-text
/// answer blocks.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: String,
}

/// Build the `FAQPage` schema for a list of question/answer items.
///
/// Returns `None` for an empty list so callers omit the script tag rather
/// than emitting an empty one.
pub fn faq_schema(items: &[FaqItem]) -> Option<FaqSchema> {
    if items.is_empty() {
        return None;
    }

    Some(FaqSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "FAQPage",
        main_entity: items
            .iter()
            .map(|item| Question {
                schema_type: "Question",
                name: item.question.clone(),
                accepted_answer: Answer {
                    schema_type: "Answer",
                    text: blocks_to_plain_text(&item.answer),
                },
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, Span};

    #[test]
    fn test_empty_items_yield_no_schema() {
        assert!(faq_schema(&[]).is_none());
    }

    #[test]
    fn test_single_item() {
        let items = vec![FaqItem {
            question: "O procedimento dói?".to_string(),
            answer: vec![Block {
                children: vec![Span {
                    text: "Não; é feita anestesia local.".to_string(),
                }],
            }],
        }];

        let schema = faq_schema(&items).expect("schema expected");
        assert_eq!(schema.schema_type, "FAQPage");
        assert_eq!(schema.main_entity.len(), 1);
        assert_eq!(schema.main_entity[0].name, "O procedimento dói?");
        assert_eq!(
            schema.main_entity[0].accepted_answer.text,
            "Não; é feita anestesia local."
        );
    }

    #[test]
    fn test_items_keep_input_order() {
        let items = vec![
            FaqItem {
                question: "Primeira?".to_string(),
                answer: vec![],
            },
            FaqItem {
                question: "Segunda?".to_string(),
                answer: vec![],
            },
        ];

        let schema = faq_schema(&items).expect("schema expected");
        assert_eq!(schema.main_entity[0].name, "Primeira?");
        assert_eq!(schema.main_entity[1].name, "Segunda?");
    }
}
