use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Running without arguments performs the whole install.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "ollama-install",
    version,
    about = "Install the latest Ollama release into ~/bin",
    long_about = None
)]
pub struct Args {
    /// Configuration file path [default: <config dir>/ollama-install.toml]
    #[clap(long, env = "OLLAMA_INSTALL_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[clap(long)]
    pub verbose: bool,
}

impl Args {
    /// Get the configuration file to load, falling back to the per-user default
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}
