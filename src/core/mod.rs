pub mod article;
pub mod breadcrumb;
pub mod faq;
pub mod fragments;
pub mod internal_links;
pub mod local_business;
pub mod organization;
pub mod page;
pub mod render;
pub mod service;

pub use crate::config::business::BusinessInfo;
pub use crate::domain::model::{BreadcrumbItem, FaqItem, InternalLink, SchemaType};
pub use crate::domain::ports::JsonLdSchema;
pub use crate::utils::error::Result;
