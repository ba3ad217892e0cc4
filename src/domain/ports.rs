use crate::config::business::BusinessInfo;
use serde_json::Value;

/// A schema.org entity that can be built from page options plus the
/// injected business identity.
pub trait JsonLdSchema {
    /// The `@type` of the emitted object, used for logging and ordering checks.
    fn schema_type(&self) -> &'static str;

    fn to_json_ld(&self, business: &BusinessInfo) -> Value;
}
