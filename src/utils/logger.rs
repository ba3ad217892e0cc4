use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Compact,
    Json,
}

fn default_directive(format: Format, verbose: bool) -> &'static str {
    match (format, verbose) {
        (Format::Json, _) => "contractor_seo=info",
        (Format::Compact, true) => "contractor_seo=debug,info",
        (Format::Compact, false) => "contractor_seo=warn",
    }
}

fn init(format: Format, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(format, verbose)));

    // stdout carries the rendered fragment, so logs go to stderr
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        Format::Compact => layer.compact().boxed(),
        Format::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
}

pub fn init_cli_logger(verbose: bool) {
    init(Format::Compact, verbose);
}

/// One JSON object per event, for log collectors.
pub fn init_json_logger() {
    init(Format::Json, false);
}
