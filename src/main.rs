use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nginx_source_viewer::catalog::CdnjsClient;
use nginx_source_viewer::config::{load_config, GeneratorConfig};
use nginx_source_viewer::document::DocumentTemplate;
use nginx_source_viewer::pipeline::generate;

#[derive(Parser)]
#[command(name = "nginx-source-viewer")]
#[command(about = "Generates an nginx config fragment serving syntax-highlighted source views", long_about = None)]
struct Cli {
    /// TOML file with the language map and optional style list.
    /// Defaults to a built-in language set covering common extensions.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the generated fragment.
    #[arg(short, long, default_value = "highlight.conf")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nginx_source_viewer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("nginx-source-viewer config generator starting");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config = load_config(path)?;
            tracing::info!(path = %path.display(), languages = config.languages.len(), "configuration loaded");
            config
        }
        None => {
            let config = GeneratorConfig::default();
            tracing::info!(languages = config.languages.len(), "using built-in configuration");
            config
        }
    };

    let catalog = CdnjsClient::new()?;
    let fragment = generate(&config, &DocumentTemplate::default(), &catalog).await?;

    std::fs::write(&cli.output, &fragment)?;
    tracing::info!(
        path = %cli.output.display(),
        bytes = fragment.len(),
        "fragment written"
    );

    Ok(())
}
