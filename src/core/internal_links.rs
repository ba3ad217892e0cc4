use crate::domain::model::InternalLink;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use html_escape::{encode_double_quoted_attribute, encode_text};

pub const DEFAULT_HEADING: &str = "Related Services";

/// "Related pages" block placed at the end of landing pages and articles.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalLinks<'a> {
    pub heading: &'a str,
    pub links: &'a [InternalLink],
}

impl<'a> InternalLinks<'a> {
    pub fn new(links: &'a [InternalLink]) -> Self {
        Self {
            heading: DEFAULT_HEADING,
            links,
        }
    }

    pub fn with_heading(mut self, heading: &'a str) -> Self {
        self.heading = heading;
        self
    }

    /// Empty string when there is nothing to link to.
    pub fn render(&self) -> String {
        if self.links.is_empty() {
            return String::new();
        }

        let mut html = format!(
            "<section class=\"internal-links\"><h2>{}</h2><ul>",
            encode_text(self.heading)
        );
        for link in self.links {
            html.push_str(&format!(
                "<li><a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(&link.href),
                encode_text(&link.title)
            ));
            if let Some(description) = &link.description {
                html.push_str(&format!("<p>{}</p>", encode_text(description)));
            }
            html.push_str("</li>");
        }
        html.push_str("</ul></section>");
        html
    }
}

impl Validate for InternalLinks<'_> {
    fn validate(&self) -> Result<()> {
        for (index, link) in self.links.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("internal_links[{}].title", index),
                &link.title,
            )?;
            validation::validate_site_path(
                &format!("internal_links[{}].href", index),
                &link.href,
            )?;
        }
        Ok(())
    }
}
