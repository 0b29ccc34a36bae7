use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ollama_install::cli::Args;
use ollama_install::config::Config;
use ollama_install::installer::Installer;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = args.config_path();
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    let installer = Installer::new(config);
    let report = installer.run().await.context("Installation failed")?;

    for warning in &report.warnings {
        println!("Warning: {warning}");
    }

    Ok(())
}
