use crate::utils::error::{Result, SchemaError};
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SchemaError::invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SchemaError::invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(SchemaError::invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SchemaError::invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SchemaError::MissingFieldError {
        field: field_name.to_string(),
    })
}

/// Site-relative paths only; the origin is prepended when building `item` URLs.
pub fn validate_site_path(field_name: &str, href: &str) -> Result<()> {
    if !href.starts_with('/') {
        return Err(SchemaError::invalid(field_name, href, "Path must start with '/'"));
    }
    if href.starts_with("//") {
        return Err(SchemaError::invalid(
            field_name,
            href,
            "Protocol-relative URLs are not site paths",
        ));
    }
    if href.chars().any(char::is_whitespace) {
        return Err(SchemaError::invalid(field_name, href, "Path contains whitespace"));
    }
    Ok(())
}

/// Accepts plain decimal amounts such as `500000` or `1250.50`.
pub fn validate_price(field_name: &str, value: &str) -> Result<()> {
    static PRICE: OnceLock<Regex> = OnceLock::new();
    let re = PRICE.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("valid price regex"));

    if !re.is_match(value) {
        return Err(SchemaError::invalid(
            field_name,
            value,
            "Price must be a non-negative decimal without currency symbols or separators",
        ));
    }
    Ok(())
}

pub fn validate_dial_phone(field_name: &str, value: &str) -> Result<()> {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    let re = PHONE.get_or_init(|| Regex::new(r"^\+\d{10,15}$").expect("valid phone regex"));

    if !re.is_match(value) {
        return Err(SchemaError::invalid(
            field_name,
            value,
            "Dial format must be '+' followed by 10-15 digits",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SchemaError::invalid(
            field_name,
            value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Parses an ISO 8601 date (`2024-03-01`) or an RFC 3339 timestamp into a
/// comparable calendar date.
pub fn parse_schema_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|_| {
            SchemaError::invalid(
                field_name,
                value,
                "Expected a YYYY-MM-DD date or an RFC 3339 timestamp",
            )
        })
}

pub fn validate_max_length(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max_chars {
        return Err(SchemaError::invalid(
            field_name,
            value,
            format!("Length {} exceeds the maximum of {} characters", len, max_chars),
        ));
    }
    Ok(())
}
