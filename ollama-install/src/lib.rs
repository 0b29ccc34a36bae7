//! # ollama-install
//!
//! Installs the latest Ollama release for Linux x86_64 into `~/bin` and makes
//! sure that directory is on the shell PATH.
//!
//! ## Overview
//!
//! The install is a single pass of four stages:
//!
//! 1. resolve the latest release tag from the GitHub releases API
//! 2. build the download URL for the configured platform
//! 3. download with `curl`, extract with `tar`, move the binary into
//!    `~/bin` and mark it executable
//! 4. append `export PATH="$HOME/bin:$PATH"` to a shell startup file unless
//!    one already has it
//!
//! Any failure in stages 1-3 aborts the run. Cleanup and PATH problems are
//! reported as warnings on an otherwise successful install.
//!
//! ## Usage
//!
//! ```bash
//! ollama-install
//! ollama-install --config ./ollama-install.toml --verbose
//! ```
//!
//! ## Configuration
//!
//! Package name, release endpoint, download base and platform tokens can be
//! overridden in `~/.config/ollama-install.toml`.

/// Command-line interface definitions
pub mod cli;

/// Configuration file handling
pub mod config;

/// Fatal errors and advisory warnings
pub mod error;

/// Download, extraction and placement of the binary
pub mod installer;

/// Filesystem layout derived from the home directory
pub mod paths;

/// External command execution
pub mod process;

/// Latest-release lookup and download URL construction
pub mod release;

/// Shell startup file editing
pub mod shell;

/// Small filesystem helpers
pub mod utils;
