use crate::core::article::ArticleOptions;
use crate::core::breadcrumb::BreadcrumbTrail;
use crate::core::faq::FaqPage;
use crate::core::internal_links::InternalLinks;
use crate::core::local_business::LocalBusinessOptions;
use crate::core::organization::OrganizationOptions;
use crate::core::service::ServiceOptions;
use crate::domain::model::{BreadcrumbItem, FaqItem, InternalLink};
use crate::utils::error::{Result, SchemaError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The structured-data blocks a page can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Organization,
    LocalBusiness,
    Service,
    Article,
    Breadcrumb,
    Faq,
}

impl SchemaKind {
    /// Order used when a page does not set `schema_order`.
    pub const CANONICAL_ORDER: [SchemaKind; 6] = [
        SchemaKind::Organization,
        SchemaKind::LocalBusiness,
        SchemaKind::Service,
        SchemaKind::Article,
        SchemaKind::Breadcrumb,
        SchemaKind::Faq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Organization => "organization",
            SchemaKind::LocalBusiness => "local_business",
            SchemaKind::Service => "service",
            SchemaKind::Article => "article",
            SchemaKind::Breadcrumb => "breadcrumb",
            SchemaKind::Faq => "faq",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit emission order; only the listed kinds are emitted.
    #[serde(default)]
    pub schema_order: Option<Vec<SchemaKind>>,
    #[serde(default)]
    pub internal_links_heading: Option<String>,
}

/// One page's structured-data declaration, read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageManifest {
    pub page: PageSection,
    #[serde(default)]
    pub organization: Option<OrganizationOptions>,
    #[serde(default)]
    pub local_business: Option<LocalBusinessOptions>,
    #[serde(default)]
    pub service: Option<ServiceOptions>,
    #[serde(default)]
    pub article: Option<ArticleOptions>,
    /// Trail below Home; Home is added when rendering.
    #[serde(default)]
    pub breadcrumbs: Vec<BreadcrumbItem>,
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
    #[serde(default)]
    pub internal_links: Vec<InternalLink>,
}

impl PageManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    /// Page copy is taken literally; `${...}` in an answer or label is text,
    /// not an environment reference.
    fn parse(content: &str, source_name: &str) -> Result<Self> {
        let manifest: PageManifest =
            toml::from_str(content).map_err(|e| SchemaError::ConfigParseError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Parsed page manifest for {} ({} schema blocks)",
            manifest.page.path,
            manifest.declared().len()
        );
        Ok(manifest)
    }

    fn is_declared(&self, kind: SchemaKind) -> bool {
        match kind {
            SchemaKind::Organization => self.organization.is_some(),
            SchemaKind::LocalBusiness => self.local_business.is_some(),
            SchemaKind::Service => self.service.is_some(),
            SchemaKind::Article => self.article.is_some(),
            SchemaKind::Breadcrumb => !self.breadcrumbs.is_empty(),
            SchemaKind::Faq => !self.faqs.is_empty(),
        }
    }

    fn declared(&self) -> Vec<SchemaKind> {
        SchemaKind::CANONICAL_ORDER
            .into_iter()
            .filter(|kind| self.is_declared(*kind))
            .collect()
    }

    /// Kinds to emit, in emission order.
    pub fn schema_order(&self) -> Vec<SchemaKind> {
        match &self.page.schema_order {
            Some(order) => order.clone(),
            None => self.declared(),
        }
    }

    pub fn breadcrumb_trail(&self) -> BreadcrumbTrail {
        BreadcrumbTrail::with_home(&self.breadcrumbs)
    }

    pub fn faq_page(&self) -> FaqPage {
        FaqPage::new(self.faqs.clone())
    }

    pub fn internal_links(&self) -> InternalLinks<'_> {
        let links = InternalLinks::new(&self.internal_links);
        match &self.page.internal_links_heading {
            Some(heading) => links.with_heading(heading),
            None => links,
        }
    }

    fn missing(kind: SchemaKind) -> SchemaError {
        SchemaError::MissingFieldError {
            field: kind.as_str().to_string(),
        }
    }
}

impl Validate for PageManifest {
    fn validate(&self) -> Result<()> {
        validation::validate_site_path("page.path", &self.page.path)?;

        let order = self.schema_order();
        for (index, kind) in order.iter().enumerate() {
            if order[..index].contains(kind) {
                return Err(SchemaError::invalid(
                    "page.schema_order",
                    kind.as_str(),
                    "Schema kind listed more than once",
                ));
            }

            match kind {
                SchemaKind::Organization => {
                    validation::validate_required_field("organization", &self.organization)?
                        .validate()?
                }
                SchemaKind::LocalBusiness => {
                    validation::validate_required_field("local_business", &self.local_business)?
                        .validate()?
                }
                SchemaKind::Service => {
                    validation::validate_required_field("service", &self.service)?.validate()?
                }
                SchemaKind::Article => {
                    validation::validate_required_field("article", &self.article)?.validate()?
                }
                SchemaKind::Breadcrumb => {
                    if self.breadcrumbs.is_empty() {
                        return Err(Self::missing(*kind));
                    }
                    self.breadcrumb_trail().validate()?
                }
                SchemaKind::Faq => self.faq_page().validate()?,
            }
        }

        // the nav is only rendered together with its BreadcrumbList script
        if !self.breadcrumbs.is_empty() && !order.contains(&SchemaKind::Breadcrumb) {
            let listed: Vec<&str> = order.iter().map(|k| k.as_str()).collect();
            return Err(SchemaError::invalid(
                "page.schema_order",
                listed.join(", "),
                "Breadcrumbs are declared but 'breadcrumb' is not in the order",
            ));
        }

        self.internal_links().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[page]
path = "/custom-homes/sarasota/"
title = "Custom Home Builder in Sarasota"

[local_business]
city = "Sarasota"
service = "Custom luxury homes"

[service]
service_name = "Custom Home Construction"
service_description = "Design-build custom homes"
city = "Sarasota"

[[breadcrumbs]]
name = "Custom Homes"
href = "/custom-homes/"

[[breadcrumbs]]
name = "Sarasota"
href = "/custom-homes/sarasota/"

[[faqs]]
question = "How long does a custom home take?"
answer = "Typically 10 to 14 months."
"#;

    #[test]
    fn test_parse_manifest_and_default_order() {
        let manifest = PageManifest::from_toml_str(MANIFEST).unwrap();

        assert_eq!(manifest.page.path, "/custom-homes/sarasota/");
        assert_eq!(manifest.service.as_ref().unwrap().min_price, "500000");
        assert_eq!(
            manifest.schema_order(),
            vec![
                SchemaKind::LocalBusiness,
                SchemaKind::Service,
                SchemaKind::Breadcrumb,
                SchemaKind::Faq
            ]
        );
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_explicit_order_is_respected() {
        let content = MANIFEST.replace(
            "title = \"Custom Home Builder in Sarasota\"",
            "schema_order = [\"faq\", \"local_business\"]",
        );
        let manifest = PageManifest::from_toml_str(&content).unwrap();
        assert_eq!(
            manifest.schema_order(),
            vec![SchemaKind::Faq, SchemaKind::LocalBusiness]
        );
    }

    #[test]
    fn test_ordering_undeclared_schema_is_missing_field() {
        let content = MANIFEST.replace(
            "title = \"Custom Home Builder in Sarasota\"",
            "schema_order = [\"article\"]",
        );
        let manifest = PageManifest::from_toml_str(&content).unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(SchemaError::MissingFieldError { field }) if field == "article"
        ));
    }

    #[test]
    fn test_duplicate_order_entry_is_rejected() {
        let content = MANIFEST.replace(
            "title = \"Custom Home Builder in Sarasota\"",
            "schema_order = [\"faq\", \"faq\"]",
        );
        let manifest = PageManifest::from_toml_str(&content).unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_breadcrumbs_left_out_of_order_are_rejected() {
        let content = MANIFEST.replace(
            "title = \"Custom Home Builder in Sarasota\"",
            "schema_order = [\"local_business\", \"faq\"]",
        );
        let manifest = PageManifest::from_toml_str(&content).unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(SchemaError::InvalidValueError { field, .. }) if field == "page.schema_order"
        ));
    }

    #[test]
    fn test_placeholders_in_page_copy_stay_literal() {
        std::env::set_var("CONTRACTOR_SEO_LOT_SIZE", "replaced");
        let content = MANIFEST.replace(
            "answer = \"Typically 10 to 14 months.\"",
            "answer = \"Quotes show ${CONTRACTOR_SEO_LOT_SIZE} until the survey is done.\"",
        );
        let manifest = PageManifest::from_toml_str(&content).unwrap();
        std::env::remove_var("CONTRACTOR_SEO_LOT_SIZE");

        assert_eq!(
            manifest.faqs[0].answer,
            "Quotes show ${CONTRACTOR_SEO_LOT_SIZE} until the survey is done."
        );
        let schema = crate::core::faq::faq_schema(&manifest.faqs);
        assert_eq!(
            schema["mainEntity"][0]["acceptedAnswer"]["text"],
            "Quotes show ${CONTRACTOR_SEO_LOT_SIZE} until the survey is done."
        );
    }

    #[test]
    fn test_unknown_schema_kind_is_parse_error() {
        let content = MANIFEST.replace(
            "title = \"Custom Home Builder in Sarasota\"",
            "schema_order = [\"recipe\"]",
        );
        assert!(matches!(
            PageManifest::from_toml_str(&content),
            Err(SchemaError::ConfigParseError { .. })
        ));
    }
}
