//! CLI entry point for articles-gen

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "generate-articles")]
#[command(version)]
#[command(about = "Render the articles listing and post pages from YAML sources", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "articles_gen=debug,info"
    } else {
        "articles_gen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let site = articles_gen::Site::new(&base_dir)?;
    tracing::info!("Generating articles into {:?}", site.output_dir);

    let count = site.generate().await?;
    println!("Generated {} article page(s).", count);

    Ok(())
}
