use crate::domain::model::{GeoCoordinates, OpeningHours, Phone, PostalAddress, SocialLinks};
use crate::utils::error::{Result, SchemaError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Cities listed in `areaServed` when a page does not target a single city.
///
/// A business TOML may replace the list through `service_area`; the built-in
/// profile and any file that omits the key use these eight.
pub const DEFAULT_SERVICE_AREA: [&str; 8] = [
    "Tampa",
    "St. Petersburg",
    "Clearwater",
    "Sarasota",
    "Bradenton",
    "Brandon",
    "Largo",
    "Palm Harbor",
];

/// Business identity shared by every generator.
///
/// Loaded once (built-in default or TOML file) and passed by reference;
/// nothing in the crate mutates it after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    /// Site origin. Stored without a trailing slash once normalized.
    pub url: String,
    pub logo: String,
    pub phone: Phone,
    pub email: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub license: String,
    pub founding_date: String,
    #[serde(default = "default_price_range")]
    pub price_range: String,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
    #[serde(default = "default_service_area")]
    pub service_area: Vec<String>,
    #[serde(default)]
    pub social: SocialLinks,
}

fn default_price_range() -> String {
    "$$$".to_string()
}

fn default_service_area() -> Vec<String> {
    DEFAULT_SERVICE_AREA.iter().map(|c| c.to_string()).collect()
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "Suncoast Custom Builders".to_string(),
            url: "https://www.suncoastcustombuilders.com".to_string(),
            logo: "https://www.suncoastcustombuilders.com/images/logo.png".to_string(),
            phone: Phone {
                display: "(813) 555-0142".to_string(),
                raw: "+18135550142".to_string(),
            },
            email: "info@suncoastcustombuilders.com".to_string(),
            address: PostalAddress {
                street: "4110 W Kennedy Blvd, Suite 200".to_string(),
                city: "Tampa".to_string(),
                state: "FL".to_string(),
                zip: "33609".to_string(),
                country: "US".to_string(),
            },
            geo: GeoCoordinates {
                lat: 27.9449,
                lng: -82.5062,
            },
            license: "CGC1531234".to_string(),
            founding_date: "2004".to_string(),
            price_range: default_price_range(),
            opening_hours: vec![OpeningHours {
                days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                    .iter()
                    .map(|d| d.to_string())
                    .collect(),
                opens: "08:00".to_string(),
                closes: "17:00".to_string(),
            }],
            service_area: default_service_area(),
            social: SocialLinks::default(),
        }
    }
}

impl BusinessInfo {
    /// Loads a business profile from TOML; the origin is normalized.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, source_name: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        let mut info: BusinessInfo =
            toml::from_str(&processed).map_err(|e| SchemaError::ConfigParseError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        info.normalize();

        tracing::info!("Loaded business info for '{}' from {}", info.name, source_name);
        Ok(info)
    }

    fn normalize(&mut self) {
        while self.url.ends_with('/') {
            self.url.pop();
        }
    }

    /// Origin without trailing slash, ready to be joined with a site path.
    pub fn origin(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn absolute_url(&self, href: &str) -> String {
        format!("{}{}", self.origin(), href)
    }
}

impl Validate for BusinessInfo {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("business.name", &self.name)?;
        validation::validate_url("business.url", &self.url)?;
        validation::validate_url("business.logo", &self.logo)?;
        validation::validate_non_empty_string("business.phone.display", &self.phone.display)?;
        validation::validate_dial_phone("business.phone.raw", &self.phone.raw)?;
        validation::validate_non_empty_string("business.email", &self.email)?;
        if !self.email.contains('@') {
            return Err(SchemaError::invalid(
                "business.email",
                &self.email,
                "Email address must contain '@'",
            ));
        }
        validation::validate_non_empty_string("business.address.street", &self.address.street)?;
        validation::validate_non_empty_string("business.address.city", &self.address.city)?;
        validation::validate_non_empty_string("business.license", &self.license)?;
        validation::validate_range("business.geo.lat", self.geo.lat, -90.0, 90.0)?;
        validation::validate_range("business.geo.lng", self.geo.lng, -180.0, 180.0)?;

        if self.service_area.is_empty() {
            return Err(SchemaError::MissingFieldError {
                field: "business.service_area".to_string(),
            });
        }

        if self.service_area != default_service_area() {
            tracing::debug!(
                "Service area overridden: {} cities instead of the default {}",
                self.service_area.len(),
                DEFAULT_SERVICE_AREA.len()
            );
        }

        for profile in self.social.profiles() {
            validation::validate_url("business.social", profile)?;
        }

        Ok(())
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables stay as written.
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| {
            tracing::warn!("Environment variable {} is not set; leaving placeholder", var_name);
            format!("${{{}}}", var_name)
        })
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BUSINESS_TOML: &str = r#"
name = "Bayside Homes"
url = "https://bayside.example.com/"
logo = "https://bayside.example.com/logo.png"
email = "hello@bayside.example.com"
license = "CBC1250000"
founding_date = "2011"

[phone]
display = "(727) 555-0199"
raw = "+17275550199"

[address]
street = "100 Central Ave"
city = "St. Petersburg"
state = "FL"
zip = "33701"

[geo]
lat = 27.7709
lng = -82.6393

[social]
facebook = "https://facebook.com/baysidehomes"
"#;

    #[test]
    fn test_default_business_is_valid() {
        let info = BusinessInfo::default();
        assert!(info.validate().is_ok());
        assert_eq!(info.service_area.len(), 8);
    }

    #[test]
    fn test_parse_business_toml_applies_defaults() {
        let info = BusinessInfo::from_toml_str(BUSINESS_TOML).unwrap();

        assert_eq!(info.name, "Bayside Homes");
        assert_eq!(info.url, "https://bayside.example.com");
        assert_eq!(info.address.country, "US");
        assert_eq!(info.price_range, "$$$");
        assert_eq!(info.service_area, default_service_area());
        assert!(info.opening_hours.is_empty());
        assert!(info.validate().is_ok());
    }

    #[test]
    fn test_absolute_url_joins_without_double_slash() {
        let info = BusinessInfo::from_toml_str(BUSINESS_TOML).unwrap();
        assert_eq!(
            info.absolute_url("/foo/"),
            "https://bayside.example.com/foo/"
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONTRACTOR_SEO_TEST_LICENSE", "CGC9999999");
        let content = BUSINESS_TOML.replace("CBC1250000", "${CONTRACTOR_SEO_TEST_LICENSE}");

        let info = BusinessInfo::from_toml_str(&content).unwrap();
        assert_eq!(info.license, "CGC9999999");

        std::env::remove_var("CONTRACTOR_SEO_TEST_LICENSE");
    }

    #[test]
    fn test_invalid_business_fails_validation() {
        let mut info = BusinessInfo::default();
        info.phone.raw = "813-555-0142".to_string();
        assert!(info.validate().is_err());

        let mut info = BusinessInfo::default();
        info.geo.lat = 127.0;
        assert!(info.validate().is_err());

        let mut info = BusinessInfo::default();
        info.service_area.clear();
        assert!(matches!(
            info.validate(),
            Err(SchemaError::MissingFieldError { .. })
        ));
    }

    #[test]
    fn test_service_area_override_replaces_default_list() {
        let content = format!("service_area = [\"Venice\", \"Nokomis\"]\n{}", BUSINESS_TOML);
        let info = BusinessInfo::from_toml_str(&content).unwrap();

        assert_eq!(info.service_area, vec!["Venice", "Nokomis"]);
        assert!(info.validate().is_ok());
        assert_eq!(BusinessInfo::default().service_area, DEFAULT_SERVICE_AREA.to_vec());
    }

    #[test]
    fn test_malformed_toml_reports_parse_error() {
        let err = BusinessInfo::from_toml_str("name = ").unwrap_err();
        assert!(matches!(err, SchemaError::ConfigParseError { .. }));
    }

    #[test]
    fn test_business_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BUSINESS_TOML.as_bytes()).unwrap();

        let info = BusinessInfo::from_file(temp_file.path()).unwrap();
        assert_eq!(info.license, "CBC1250000");
    }
}
