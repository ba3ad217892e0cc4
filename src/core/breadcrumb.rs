use crate::config::business::BusinessInfo;
use crate::core::render;
use crate::domain::model::{BreadcrumbItem, SCHEMA_CONTEXT};
use crate::domain::ports::JsonLdSchema;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const HOME_LABEL: &str = "Home";
pub const HOME_HREF: &str = "/";

/// Ordered navigation trail, root first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreadcrumbTrail {
    pub items: Vec<BreadcrumbItem>,
}

impl BreadcrumbTrail {
    pub fn new(items: Vec<BreadcrumbItem>) -> Self {
        Self { items }
    }

    /// Trail as the visible component shows it: `Home` first, then `items`.
    pub fn with_home(items: &[BreadcrumbItem]) -> Self {
        let mut trail = Vec::with_capacity(items.len() + 1);
        trail.push(BreadcrumbItem::new(HOME_LABEL, HOME_HREF));
        trail.extend_from_slice(items);
        Self { items: trail }
    }
}

impl JsonLdSchema for BreadcrumbTrail {
    fn schema_type(&self) -> &'static str {
        "BreadcrumbList"
    }

    fn to_json_ld(&self, business: &BusinessInfo) -> Value {
        let elements: Vec<Value> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": item.name,
                    "item": business.absolute_url(&item.href),
                })
            })
            .collect();

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "BreadcrumbList",
            "itemListElement": elements,
        })
    }
}

impl Validate for BreadcrumbTrail {
    fn validate(&self) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("breadcrumbs[{}].name", index),
                &item.name,
            )?;
            validation::validate_site_path(&format!("breadcrumbs[{}].href", index), &item.href)?;
        }
        Ok(())
    }
}

pub fn breadcrumb_schema(business: &BusinessInfo, items: &[BreadcrumbItem]) -> Value {
    BreadcrumbTrail::new(items.to_vec()).to_json_ld(business)
}

/// Visible breadcrumb navigation for a page.
///
/// `items` excludes Home; it is prepended here. The last entry is the
/// current page and is rendered as text, not a link.
pub fn breadcrumb_nav(items: &[BreadcrumbItem]) -> String {
    let trail = BreadcrumbTrail::with_home(items);
    let last = trail.items.len() - 1;

    let mut html = String::from("<nav aria-label=\"Breadcrumb\" class=\"breadcrumb\"><ol>");
    for (index, item) in trail.items.iter().enumerate() {
        if index == last {
            html.push_str(&format!(
                "<li aria-current=\"page\">{}</li>",
                encode_text(&item.name)
            ));
        } else {
            html.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                encode_double_quoted_attribute(&item.href),
                encode_text(&item.name)
            ));
        }
    }
    html.push_str("</ol></nav>");
    html
}

/// Breadcrumb component: the navigation followed by the `BreadcrumbList`
/// script for the same Home-prefixed trail.
pub fn render_breadcrumb(business: &BusinessInfo, items: &[BreadcrumbItem]) -> Result<String> {
    let mut html = breadcrumb_nav(items);
    let trail = BreadcrumbTrail::with_home(items);
    html.push_str(&render::script_tag(&trail.to_json_ld(business), false)?);
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail() -> Vec<BreadcrumbItem> {
        vec![
            BreadcrumbItem::new("Services", "/services/"),
            BreadcrumbItem::new("Custom Homes", "/services/custom-homes/"),
        ]
    }

    #[test]
    fn test_positions_are_one_based_and_ordered() {
        let business = BusinessInfo::default();
        let schema = breadcrumb_schema(&business, &trail());
        let elements = schema["itemListElement"].as_array().unwrap();

        assert_eq!(elements.len(), 2);
        for (i, element) in elements.iter().enumerate() {
            assert_eq!(element["position"], i + 1);
        }
        assert_eq!(elements[1]["name"], "Custom Homes");
    }

    #[test]
    fn test_item_is_origin_plus_href() {
        let business = BusinessInfo::default();
        let schema = breadcrumb_schema(&business, &[BreadcrumbItem::new("Foo", "/foo/")]);

        assert_eq!(
            schema["itemListElement"][0]["item"],
            format!("{}/foo/", business.origin())
        );
    }

    #[test]
    fn test_empty_trail_yields_empty_list() {
        let business = BusinessInfo::default();
        let schema = breadcrumb_schema(&business, &[]);
        assert_eq!(schema["itemListElement"], json!([]));
    }

    #[test]
    fn test_render_prepends_home_and_marks_current_page() {
        let business = BusinessInfo::default();
        let html = render_breadcrumb(&business, &trail()).unwrap();

        assert!(html.starts_with("<nav aria-label=\"Breadcrumb\""));
        assert!(html.contains("<li><a href=\"/\">Home</a></li>"));
        assert!(html.contains("<li><a href=\"/services/\">Services</a></li>"));
        assert!(html.contains("<li aria-current=\"page\">Custom Homes</li>"));
        assert_eq!(html.matches("aria-current").count(), 1);
        assert!(html.contains("\"position\":3"));
    }

    #[test]
    fn test_render_with_no_items_shows_home_as_current() {
        let business = BusinessInfo::default();
        let html = render_breadcrumb(&business, &[]).unwrap();
        assert!(html.contains("<li aria-current=\"page\">Home</li>"));
    }

    #[test]
    fn test_render_escapes_labels() {
        let business = BusinessInfo::default();
        let html =
            render_breadcrumb(&business, &[BreadcrumbItem::new("Kitchens & <Baths>", "/kb/")])
                .unwrap();
        assert!(html.contains("Kitchens &amp; &lt;Baths&gt;"));
    }

    #[test]
    fn test_validation_rejects_relative_href() {
        let trail = BreadcrumbTrail::new(vec![BreadcrumbItem::new("Foo", "foo/")]);
        assert!(trail.validate().is_err());
    }
}
