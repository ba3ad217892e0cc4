use clap::Parser;
use contractor_seo::utils::{logger, validation::Validate};
use contractor_seo::{BusinessInfo, CliConfig, PageManifest, PageRenderer, SchemaError};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), SchemaError> {
    config.validate()?;

    let business = match &config.business {
        Some(path) => BusinessInfo::from_file(path)?,
        None => {
            tracing::debug!("No --business file given; using the built-in company profile");
            BusinessInfo::default()
        }
    };
    business.validate()?;

    let manifest = PageManifest::from_file(&config.page)?;

    if config.check {
        manifest.validate()?;
        tracing::info!("✅ {} is valid", config.page);
        println!("✅ {} is valid ({} schema blocks)", config.page, manifest.schema_order().len());
        return Ok(());
    }

    let page = PageRenderer::new(&business)
        .pretty(config.pretty)
        .render(&manifest)?;

    let fragment = if config.head_only {
        page.head_fragment()
    } else {
        page.to_html_fragment()
    };

    match &config.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", fragment))?;
            tracing::info!("📁 Wrote {} to {}", page.path, path);
        }
        None => println!("{}", fragment),
    }

    Ok(())
}
