use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use marginalia::document::Document;
use marginalia::{App, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "marginalia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the markdown or text file to read
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marginalia=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let settings = Settings::load()?;
    let document = Document::load(&cli.file)?;

    let mut app = App::new(settings, document)?;
    app.run().await?;

    Ok(())
}
