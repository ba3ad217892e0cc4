use crate::config::business::BusinessInfo;
use crate::core::fragments;
use crate::domain::model::{SchemaType, SCHEMA_CONTEXT};
use crate::domain::ports::JsonLdSchema;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Options for the business entity emitted on landing pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalBusinessOptions {
    #[serde(default)]
    pub city: Option<String>,
    /// Free-text specialty, emitted as `knowsAbout`.
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub schema_type: SchemaType,
}

impl LocalBusinessOptions {
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Default::default()
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_schema_type(mut self, schema_type: SchemaType) -> Self {
        self.schema_type = schema_type;
        self
    }
}

impl JsonLdSchema for LocalBusinessOptions {
    fn schema_type(&self) -> &'static str {
        self.schema_type.as_str()
    }

    fn to_json_ld(&self, business: &BusinessInfo) -> Value {
        let mut schema = json!({
            "@context": SCHEMA_CONTEXT,
            "@type": self.schema_type.as_str(),
            "@id": business.absolute_url("/#business"),
            "name": business.name,
            "url": business.origin(),
            "logo": business.logo,
            "image": business.logo,
            "telephone": business.phone.raw,
            "email": business.email,
            "priceRange": business.price_range,
            "address": fragments::postal_address(business),
            "geo": fragments::geo_coordinates(business),
            "areaServed": fragments::area_served(business, self.city.as_deref()),
            "hasCredential": fragments::license_credential(business),
            "foundingDate": business.founding_date,
        });

        if !business.opening_hours.is_empty() {
            schema["openingHoursSpecification"] = fragments::opening_hours(business);
        }
        if let Some(service) = &self.service {
            schema["knowsAbout"] = json!(service);
        }
        if !business.social.is_empty() {
            schema["sameAs"] = fragments::same_as(business);
        }

        schema
    }
}

impl Validate for LocalBusinessOptions {
    fn validate(&self) -> Result<()> {
        if let Some(city) = &self.city {
            validation::validate_non_empty_string("local_business.city", city)?;
        }
        if let Some(service) = &self.service {
            validation::validate_non_empty_string("local_business.service", service)?;
        }
        Ok(())
    }
}

/// Business entity for a page, optionally scoped to one city.
pub fn local_business_schema(business: &BusinessInfo, options: &LocalBusinessOptions) -> Value {
    options.to_json_ld(business)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::business::DEFAULT_SERVICE_AREA;

    #[test]
    fn test_defaults_to_general_contractor_with_full_service_area() {
        let business = BusinessInfo::default();
        let schema = local_business_schema(&business, &LocalBusinessOptions::default());

        assert_eq!(schema["@context"], "https://schema.org");
        assert_eq!(schema["@type"], "GeneralContractor");
        let area = schema["areaServed"].as_array().unwrap();
        assert_eq!(area.len(), 8);
        for (entry, city) in area.iter().zip(DEFAULT_SERVICE_AREA) {
            assert_eq!(entry["name"], city);
        }
        assert!(schema.get("knowsAbout").is_none());
    }

    #[test]
    fn test_city_produces_single_area_object() {
        let business = BusinessInfo::default();
        let schema = local_business_schema(&business, &LocalBusinessOptions::for_city("Sarasota"));

        assert!(schema["areaServed"].is_object());
        assert_eq!(schema["areaServed"]["name"], "Sarasota");
    }

    #[test]
    fn test_service_and_type_override() {
        let business = BusinessInfo::default();
        let options = LocalBusinessOptions::default()
            .with_service("Custom pool homes")
            .with_schema_type(SchemaType::HomeAndConstructionBusiness);
        let schema = local_business_schema(&business, &options);

        assert_eq!(schema["@type"], "HomeAndConstructionBusiness");
        assert_eq!(schema["knowsAbout"], "Custom pool homes");
    }

    #[test]
    fn test_business_fields_are_merged() {
        let business = BusinessInfo::default();
        let schema = local_business_schema(&business, &LocalBusinessOptions::default());

        assert_eq!(schema["address"]["addressLocality"], "Tampa");
        assert_eq!(schema["address"]["addressRegion"], "FL");
        assert_eq!(schema["geo"]["latitude"], business.geo.lat);
        assert_eq!(schema["hasCredential"]["identifier"], business.license);
        assert_eq!(schema["foundingDate"], business.founding_date);
        assert_eq!(schema["telephone"], business.phone.raw);
        assert!(schema["openingHoursSpecification"].is_array());
        assert!(schema.get("sameAs").is_none());
    }

    #[test]
    fn test_blank_city_fails_validation() {
        assert!(LocalBusinessOptions::for_city("  ").validate().is_err());
        assert!(LocalBusinessOptions::default().validate().is_ok());
    }
}
