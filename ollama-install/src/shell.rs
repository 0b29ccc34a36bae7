//! Keeps `~/bin` on the user's shell PATH.
//!
//! The candidate startup files are treated as one logical target: the export
//! line is written to at most one of them, and never again once any of them
//! carries it.

use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};
use crate::utils;

pub const PATH_EXPORT_LINE: &str = r#"export PATH="$HOME/bin:$PATH""#;

/// A shell startup file relative to the home directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfigCandidate {
    pub file_name: &'static str,
    /// Whether the file may be created when it does not exist yet
    pub create_if_missing: bool,
}

/// Interactive zsh first (only if the user already has one), then bash login,
/// bash interactive, and the generic profile.
pub const SHELL_CONFIG_CANDIDATES: [ShellConfigCandidate; 4] = [
    ShellConfigCandidate {
        file_name: ".zshrc",
        create_if_missing: false,
    },
    ShellConfigCandidate {
        file_name: ".bash_profile",
        create_if_missing: true,
    },
    ShellConfigCandidate {
        file_name: ".bashrc",
        create_if_missing: true,
    },
    ShellConfigCandidate {
        file_name: ".profile",
        create_if_missing: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathUpdate {
    /// The line was already present in this file; nothing was written
    AlreadyPresent(PathBuf),
    /// The line was appended to this file
    Appended(PathBuf),
}

impl PathUpdate {
    pub fn path(&self) -> &Path {
        match self {
            PathUpdate::AlreadyPresent(path) | PathUpdate::Appended(path) => path,
        }
    }
}

pub struct PathUpdater {
    home: PathBuf,
}

impl PathUpdater {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn ensure_on_path(&self) -> Result<PathUpdate> {
        if let Some(existing) = self.find_existing() {
            tracing::info!("PATH export already present in {}", existing.display());
            return Ok(PathUpdate::AlreadyPresent(existing));
        }

        let mut failures = Vec::new();
        for candidate in &SHELL_CONFIG_CANDIDATES {
            let path = self.home.join(candidate.file_name);
            if !candidate.create_if_missing && !path.exists() {
                tracing::debug!("Skipping {}: not present", path.display());
                continue;
            }

            match utils::append_line(&path, PATH_EXPORT_LINE) {
                Ok(()) => {
                    println!("Updated {} with PATH export", candidate.file_name);
                    return Ok(PathUpdate::Appended(path));
                }
                Err(e) => {
                    tracing::info!("Could not append to {}: {}", path.display(), e);
                    failures.push(format!("{}: {e}", candidate.file_name));
                }
            }
        }

        Err(InstallError::Filesystem {
            path: self.home.display().to_string(),
            reason: format!(
                "failed to update any shell configuration file ({})",
                failures.join("; ")
            ),
        })
    }

    /// First candidate already containing the export line. Unreadable files
    /// count as not containing it.
    fn find_existing(&self) -> Option<PathBuf> {
        SHELL_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| self.home.join(candidate.file_name))
            .find(|path| utils::file_contains_line(path, PATH_EXPORT_LINE).unwrap_or(false))
    }
}
