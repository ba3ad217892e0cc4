pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::business::{BusinessInfo, DEFAULT_SERVICE_AREA};
pub use config::page_manifest::{PageManifest, SchemaKind};
pub use crate::core::{
    article::{article_schema, ArticleOptions},
    breadcrumb::{breadcrumb_nav, breadcrumb_schema, render_breadcrumb, BreadcrumbTrail},
    faq::{faq_schema, FaqPage},
    internal_links::InternalLinks,
    local_business::{local_business_schema, LocalBusinessOptions},
    organization::{organization_schema, OrganizationOptions},
    page::{PageRenderer, RenderedPage},
    render::script_tag,
    service::{service_schema, ServiceOptions},
};
pub use domain::model::{BreadcrumbItem, FaqItem, InternalLink, SchemaType};
pub use domain::ports::JsonLdSchema;
pub use utils::error::{Result, SchemaError};
