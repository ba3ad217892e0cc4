use crate::config::business::BusinessInfo;
use crate::core::fragments;
use crate::domain::model::{SchemaType, SCHEMA_CONTEXT};
use crate::domain::ports::JsonLdSchema;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOptions {
    pub service_name: String,
    pub service_description: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default = "ServiceOptions::default_min_price")]
    pub min_price: String,
    /// `@type` of the provider node. It shares its `@id` with the page's
    /// business entity, so both must carry the same type.
    #[serde(default)]
    pub provider_type: SchemaType,
}

impl ServiceOptions {
    /// Starting price advertised when a page does not name one.
    pub const DEFAULT_MIN_PRICE: &'static str = "500000";
    pub const PRICE_CURRENCY: &'static str = "USD";

    pub fn new(service_name: impl Into<String>, service_description: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_description: service_description.into(),
            city: None,
            min_price: Self::default_min_price(),
            provider_type: SchemaType::default(),
        }
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_min_price(mut self, min_price: impl Into<String>) -> Self {
        self.min_price = min_price.into();
        self
    }

    pub fn with_provider_type(mut self, provider_type: SchemaType) -> Self {
        self.provider_type = provider_type;
        self
    }

    fn default_min_price() -> String {
        Self::DEFAULT_MIN_PRICE.to_string()
    }
}

impl JsonLdSchema for ServiceOptions {
    fn schema_type(&self) -> &'static str {
        "Service"
    }

    fn to_json_ld(&self, business: &BusinessInfo) -> Value {
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Service",
            "name": self.service_name,
            "serviceType": self.service_name,
            "description": self.service_description,
            "provider": {
                "@type": self.provider_type.as_str(),
                "@id": business.absolute_url("/#business"),
                "name": business.name,
                "url": business.origin(),
                "telephone": business.phone.raw,
                "address": fragments::postal_address(business),
            },
            "areaServed": fragments::area_served(business, self.city.as_deref()),
            "offers": {
                "@type": "Offer",
                "priceCurrency": Self::PRICE_CURRENCY,
                "priceSpecification": {
                    "@type": "PriceSpecification",
                    "minPrice": self.min_price,
                    "priceCurrency": Self::PRICE_CURRENCY,
                },
            },
        })
    }
}

impl Validate for ServiceOptions {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("service.service_name", &self.service_name)?;
        validation::validate_non_empty_string(
            "service.service_description",
            &self.service_description,
        )?;
        if let Some(city) = &self.city {
            validation::validate_non_empty_string("service.city", city)?;
        }
        validation::validate_price("service.min_price", &self.min_price)
    }
}

pub fn service_schema(business: &BusinessInfo, options: &ServiceOptions) -> Value {
    options.to_json_ld(business)
}
