use crate::config::business::BusinessInfo;
use crate::config::page_manifest::{PageManifest, SchemaKind};
use crate::core::breadcrumb;
use crate::core::render;
use crate::domain::ports::JsonLdSchema;
use crate::utils::error::{Result, SchemaError};
use crate::utils::validation::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSchema {
    pub kind: SchemaKind,
    pub script: String,
}

/// Markup generated for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub path: String,
    /// JSON-LD scripts in emission order.
    pub schemas: Vec<RenderedSchema>,
    pub breadcrumb_nav: Option<String>,
    pub internal_links: Option<String>,
}

impl RenderedPage {
    /// Scripts for the document head, one per line.
    pub fn head_fragment(&self) -> String {
        self.schemas
            .iter()
            .map(|s| s.script.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Head scripts followed by the body components that were declared.
    pub fn to_html_fragment(&self) -> String {
        let mut parts = vec![self.head_fragment()];
        parts.extend(self.breadcrumb_nav.clone());
        parts.extend(self.internal_links.clone());
        parts.retain(|p| !p.is_empty());
        parts.join("\n")
    }
}

/// Composes the structured data a page declares.
pub struct PageRenderer<'a> {
    business: &'a BusinessInfo,
    pretty: bool,
}

impl<'a> PageRenderer<'a> {
    pub fn new(business: &'a BusinessInfo) -> Self {
        Self {
            business,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Validates the manifest, then renders every schema in emission order.
    pub fn render(&self, manifest: &PageManifest) -> Result<RenderedPage> {
        manifest.validate()?;
        tracing::debug!("Rendering structured data for {}", manifest.page.path);

        let mut schemas = Vec::new();
        for kind in manifest.schema_order() {
            let schema = self.build(manifest, kind)?;
            tracing::debug!("Emitting {} ({})", schema.schema_type(), kind);

            let script = render::script_tag(&schema.to_json_ld(self.business), self.pretty)?;
            schemas.push(RenderedSchema { kind, script });
        }

        let breadcrumb_nav = if manifest.breadcrumbs.is_empty() {
            None
        } else {
            Some(breadcrumb::breadcrumb_nav(&manifest.breadcrumbs))
        };

        let links = manifest.internal_links().render();
        let internal_links = if links.is_empty() { None } else { Some(links) };

        tracing::info!(
            "Rendered {} schema blocks for {}",
            schemas.len(),
            manifest.page.path
        );

        Ok(RenderedPage {
            path: manifest.page.path.clone(),
            schemas,
            breadcrumb_nav,
            internal_links,
        })
    }

    fn build(&self, manifest: &PageManifest, kind: SchemaKind) -> Result<Box<dyn JsonLdSchema>> {
        let missing = || SchemaError::MissingFieldError {
            field: kind.as_str().to_string(),
        };

        let schema: Box<dyn JsonLdSchema> = match kind {
            SchemaKind::Organization => {
                Box::new(manifest.organization.clone().ok_or_else(missing)?)
            }
            SchemaKind::LocalBusiness => {
                Box::new(manifest.local_business.clone().ok_or_else(missing)?)
            }
            SchemaKind::Service => {
                let mut service = manifest.service.clone().ok_or_else(missing)?;
                // provider and business entity share one @id
                if let Some(local_business) = &manifest.local_business {
                    service.provider_type = local_business.schema_type;
                }
                Box::new(service)
            }
            SchemaKind::Article => Box::new(manifest.article.clone().ok_or_else(missing)?),
            SchemaKind::Breadcrumb => Box::new(manifest.breadcrumb_trail()),
            SchemaKind::Faq => Box::new(manifest.faq_page()),
        };
        Ok(schema)
    }
}
