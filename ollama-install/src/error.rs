use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the install pipeline.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Failed to fetch latest release from {url}: {message}")]
    Network { url: String, message: String },

    #[error("Failed to decode release metadata from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("Could not determine the home directory; refusing to install relative to an empty path")]
    HomeDirUnavailable,

    #[error("Failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("Failed to extract {archive}: {reason}")]
    Extract { archive: String, reason: String },

    #[error("Filesystem operation failed at {path}: {reason}")]
    Filesystem { path: String, reason: String },

    #[error("Configuration error at {path}: {message}")]
    Config { path: String, message: String },
}

impl InstallError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        InstallError::Filesystem {
            path: path.into().display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Failures that are reported but leave a successful install in place.
#[derive(Error, Debug)]
pub enum InstallWarning {
    #[error("Failed to clean up {}: {reason}", .path.display())]
    Cleanup { path: PathBuf, reason: String },

    #[error("Failed to update PATH: {0}")]
    PathUpdate(InstallError),
}

pub type Result<T> = std::result::Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_update_warning_wraps_message() {
        let warning = InstallWarning::PathUpdate(InstallError::filesystem(
            "/home/u/.profile",
            "permission denied",
        ));
        assert_eq!(
            warning.to_string(),
            "Failed to update PATH: Filesystem operation failed at /home/u/.profile: permission denied"
        );
    }
}
