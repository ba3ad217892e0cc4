use crate::config::business::BusinessInfo;
use crate::core::fragments;
use crate::domain::model::SCHEMA_CONTEXT;
use crate::domain::ports::JsonLdSchema;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationOptions {
    /// Emit `sameAs` with the business's social profiles.
    #[serde(default)]
    pub include_social: bool,
}

impl JsonLdSchema for OrganizationOptions {
    fn schema_type(&self) -> &'static str {
        "Organization"
    }

    fn to_json_ld(&self, business: &BusinessInfo) -> Value {
        let mut schema = json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Organization",
            "@id": business.absolute_url("/#organization"),
            "name": business.name,
            "url": business.origin(),
            "logo": fragments::logo(business),
            "email": business.email,
            "telephone": business.phone.raw,
            "foundingDate": business.founding_date,
            "address": fragments::postal_address(business),
            "contactPoint": {
                "@type": "ContactPoint",
                "telephone": business.phone.raw,
                "contactType": "customer service",
                "areaServed": format!("{}-{}", business.address.country, business.address.state),
                "availableLanguage": ["English", "Spanish"],
            },
        });

        if self.include_social && !business.social.is_empty() {
            schema["sameAs"] = fragments::same_as(business);
        }

        schema
    }
}

impl Validate for OrganizationOptions {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

pub fn organization_schema(business: &BusinessInfo, options: &OrganizationOptions) -> Value {
    options.to_json_ld(business)
}
