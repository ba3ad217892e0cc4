pub mod business;
pub mod page_manifest;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "contractor-seo")]
#[command(about = "Render schema.org JSON-LD for contractor landing pages")]
pub struct CliConfig {
    /// Page manifest (TOML) to render
    #[arg(short, long)]
    pub page: String,

    /// Business info (TOML); the built-in company profile is used when omitted
    #[arg(short, long)]
    pub business: Option<String>,

    /// Write the fragment to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pretty-print JSON inside the script tags
    #[arg(long)]
    pub pretty: bool,

    /// Only include the JSON-LD scripts, not breadcrumb or link markup
    #[arg(long)]
    pub head_only: bool,

    /// Validate the inputs without rendering
    #[arg(long)]
    pub check: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("--page", &self.page)?;
        if let Some(business) = &self.business {
            validation::validate_non_empty_string("--business", business)?;
        }
        if let Some(output) = &self.output {
            validation::validate_non_empty_string("--output", output)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_flags() {
        let config = CliConfig::parse_from([
            "contractor-seo",
            "--page",
            "pages/tampa.toml",
            "--business",
            "business.toml",
            "--pretty",
            "--check",
        ]);

        assert_eq!(config.page, "pages/tampa.toml");
        assert_eq!(config.business.as_deref(), Some("business.toml"));
        assert!(config.pretty);
        assert!(config.check);
        assert!(!config.head_only);
        assert!(config.validate().is_ok());
    }
}
