use serde::{Deserialize, Serialize};
use std::fmt;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub href: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The `@type` emitted for the business entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaType {
    #[default]
    GeneralContractor,
    HomeAndConstructionBusiness,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::GeneralContractor => "GeneralContractor",
            SchemaType::HomeAndConstructionBusiness => "HomeAndConstructionBusiness",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "US".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Human-readable form shown on the page, e.g. `(813) 555-0142`.
    pub display: String,
    /// `tel:` form, e.g. `+18135550142`.
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub days: Vec<String>,
    pub opens: String,
    pub closes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub houzz: Option<String>,
}

impl SocialLinks {
    /// Profiles in a stable order, skipping the ones that are not set.
    pub fn profiles(&self) -> Vec<&str> {
        [
            &self.facebook,
            &self.instagram,
            &self.linkedin,
            &self.youtube,
            &self.houzz,
        ]
        .into_iter()
        .filter_map(|link| link.as_deref())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles().is_empty()
    }
}
