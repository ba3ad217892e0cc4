use crate::config::business::BusinessInfo;
use crate::domain::model::{FaqItem, SCHEMA_CONTEXT};
use crate::domain::ports::JsonLdSchema;
use crate::utils::error::{Result, SchemaError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// FAQ entries as displayed on the page.
///
/// Question and answer text is copied verbatim and in order: search engines
/// compare this payload against the visible accordion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqPage {
    pub faqs: Vec<FaqItem>,
}

impl FaqPage {
    pub fn new(faqs: Vec<FaqItem>) -> Self {
        Self { faqs }
    }
}

impl JsonLdSchema for FaqPage {
    fn schema_type(&self) -> &'static str {
        "FAQPage"
    }

    fn to_json_ld(&self, _business: &BusinessInfo) -> Value {
        faq_schema(&self.faqs)
    }
}

impl Validate for FaqPage {
    fn validate(&self) -> Result<()> {
        if self.faqs.is_empty() {
            return Err(SchemaError::MissingFieldError {
                field: "faqs".to_string(),
            });
        }
        for (index, faq) in self.faqs.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("faqs[{}].question", index),
                &faq.question,
            )?;
            validation::validate_non_empty_string(
                &format!("faqs[{}].answer", index),
                &faq.answer,
            )?;
        }
        Ok(())
    }
}

pub fn faq_schema(faqs: &[FaqItem]) -> Value {
    let main_entity: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": main_entity,
    })
}
