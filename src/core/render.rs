//! Embedding of JSON-LD objects into HTML.

use crate::utils::error::Result;
use serde_json::Value;

pub const JSON_LD_MIME: &str = "application/ld+json";

/// Serializes `schema` into a `<script type="application/ld+json">` element.
///
/// `</` is written as `<\/`, which JSON parsers read back unchanged but which
/// cannot terminate the surrounding script element.
pub fn script_tag(schema: &Value, pretty: bool) -> Result<String> {
    let body = if pretty {
        serde_json::to_string_pretty(schema)?
    } else {
        serde_json::to_string(schema)?
    };

    Ok(format!(
        "<script type=\"{}\">{}</script>",
        JSON_LD_MIME,
        body.replace("</", "<\\/")
    ))
}
