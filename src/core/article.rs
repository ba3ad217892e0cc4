use crate::config::business::BusinessInfo;
use crate::core::fragments;
use crate::domain::model::SCHEMA_CONTEXT;
use crate::domain::ports::JsonLdSchema;
use crate::utils::error::{Result, SchemaError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Google truncates longer headlines in article rich results.
pub const MAX_HEADLINE_CHARS: usize = 110;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleOptions {
    pub headline: String,
    pub description: String,
    pub date_published: String,
    /// Falls back to `date_published`.
    #[serde(default)]
    pub date_modified: Option<String>,
    /// Person credited as author; the business is credited when absent.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Site path of the article page, used for `mainEntityOfPage`.
    #[serde(default)]
    pub path: Option<String>,
}

impl ArticleOptions {
    pub fn new(
        headline: impl Into<String>,
        description: impl Into<String>,
        date_published: impl Into<String>,
    ) -> Self {
        Self {
            headline: headline.into(),
            description: description.into(),
            date_published: date_published.into(),
            date_modified: None,
            author: None,
            image: None,
            path: None,
        }
    }

    pub fn modified_on(mut self, date: impl Into<String>) -> Self {
        self.date_modified = Some(date.into());
        self
    }

    pub fn by(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl JsonLdSchema for ArticleOptions {
    fn schema_type(&self) -> &'static str {
        "Article"
    }

    fn to_json_ld(&self, business: &BusinessInfo) -> Value {
        let author = match &self.author {
            Some(name) => json!({ "@type": "Person", "name": name }),
            None => json!({
                "@type": "Organization",
                "name": business.name,
                "url": business.origin(),
            }),
        };

        let mut schema = json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Article",
            "headline": self.headline,
            "description": self.description,
            "datePublished": self.date_published,
            "dateModified": self.date_modified.as_deref().unwrap_or(&self.date_published),
            "author": author,
            "publisher": {
                "@type": "Organization",
                "name": business.name,
                "logo": fragments::logo(business),
            },
        });

        if let Some(image) = &self.image {
            schema["image"] = json!(image);
        }
        if let Some(path) = &self.path {
            schema["mainEntityOfPage"] = json!({
                "@type": "WebPage",
                "@id": business.absolute_url(path),
            });
        }

        schema
    }
}

impl Validate for ArticleOptions {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("article.headline", &self.headline)?;
        validation::validate_max_length("article.headline", &self.headline, MAX_HEADLINE_CHARS)?;
        validation::validate_non_empty_string("article.description", &self.description)?;

        let published =
            validation::parse_schema_date("article.date_published", &self.date_published)?;
        if let Some(modified) = &self.date_modified {
            let modified_date = validation::parse_schema_date("article.date_modified", modified)?;
            if modified_date < published {
                return Err(SchemaError::invalid(
                    "article.date_modified",
                    modified,
                    "Modification date precedes the publication date",
                ));
            }
        }

        if let Some(author) = &self.author {
            validation::validate_non_empty_string("article.author", author)?;
        }
        if let Some(image) = &self.image {
            validation::validate_url("article.image", image)?;
        }
        if let Some(path) = &self.path {
            validation::validate_site_path("article.path", path)?;
        }
        Ok(())
    }
}

pub fn article_schema(business: &BusinessInfo, options: &ArticleOptions) -> Value {
    options.to_json_ld(business)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArticleOptions {
        ArticleOptions::new(
            "Building Above Base Flood Elevation in Pinellas County",
            "What elevated construction means for coastal homeowners.",
            "2024-02-12",
        )
    }

    #[test]
    fn test_modified_defaults_to_published_and_business_is_author() {
        let business = BusinessInfo::default();
        let schema = article_schema(&business, &sample());

        assert_eq!(schema["@type"], "Article");
        assert_eq!(schema["datePublished"], "2024-02-12");
        assert_eq!(schema["dateModified"], "2024-02-12");
        assert_eq!(schema["author"]["@type"], "Organization");
        assert_eq!(schema["author"]["name"], business.name);
        assert_eq!(schema["publisher"]["logo"]["url"], business.logo);
        assert!(schema.get("mainEntityOfPage").is_none());
    }

    #[test]
    fn test_optional_fields_are_emitted() {
        let business = BusinessInfo::default();
        let options = sample()
            .modified_on("2024-05-01")
            .by("Dana Ruiz")
            .with_image("https://cdn.example.com/elevated.jpg")
            .at_path("/blog/building-above-bfe/");
        let schema = article_schema(&business, &options);

        assert_eq!(schema["dateModified"], "2024-05-01");
        assert_eq!(schema["author"], json!({ "@type": "Person", "name": "Dana Ruiz" }));
        assert_eq!(schema["image"], "https://cdn.example.com/elevated.jpg");
        assert_eq!(
            schema["mainEntityOfPage"]["@id"],
            business.absolute_url("/blog/building-above-bfe/")
        );
    }

    #[test]
    fn test_validation_rules() {
        assert!(sample().validate().is_ok());
        assert!(sample().modified_on("2024-01-01").validate().is_err());
        assert!(sample().modified_on("2024-02-12T10:00:00Z").validate().is_ok());

        let mut bad_date = sample();
        bad_date.date_published = "Feb 12, 2024".to_string();
        assert!(bad_date.validate().is_err());

        let mut long = sample();
        long.headline = "x".repeat(MAX_HEADLINE_CHARS + 1);
        assert!(long.validate().is_err());
    }
}
