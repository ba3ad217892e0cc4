//! Nested schema.org objects reused by several generators.

use crate::config::business::BusinessInfo;
use serde_json::{json, Value};

pub fn postal_address(business: &BusinessInfo) -> Value {
    json!({
        "@type": "PostalAddress",
        "streetAddress": business.address.street,
        "addressLocality": business.address.city,
        "addressRegion": business.address.state,
        "postalCode": business.address.zip,
        "addressCountry": business.address.country,
    })
}

pub fn geo_coordinates(business: &BusinessInfo) -> Value {
    json!({
        "@type": "GeoCoordinates",
        "latitude": business.geo.lat,
        "longitude": business.geo.lng,
    })
}

/// One `City` when the page targets a city, otherwise the whole service area.
pub fn area_served(business: &BusinessInfo, city: Option<&str>) -> Value {
    match city {
        Some(city) => city_entry(city),
        None => Value::Array(
            business
                .service_area
                .iter()
                .map(|c| city_entry(c))
                .collect(),
        ),
    }
}

fn city_entry(name: &str) -> Value {
    json!({ "@type": "City", "name": name })
}

pub fn logo(business: &BusinessInfo) -> Value {
    json!({ "@type": "ImageObject", "url": business.logo })
}

pub fn license_credential(business: &BusinessInfo) -> Value {
    json!({
        "@type": "EducationalOccupationalCredential",
        "credentialCategory": "license",
        "name": format!("{} State Contractor License", business.address.state),
        "identifier": business.license,
    })
}

pub fn opening_hours(business: &BusinessInfo) -> Value {
    Value::Array(
        business
            .opening_hours
            .iter()
            .map(|hours| {
                json!({
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": hours.days,
                    "opens": hours.opens,
                    "closes": hours.closes,
                })
            })
            .collect(),
    )
}

pub fn same_as(business: &BusinessInfo) -> Value {
    json!(business.social.profiles())
}
