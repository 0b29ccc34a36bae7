use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};

/// Every location the installer touches, derived from the home directory
/// and the package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub home: PathBuf,
    /// `<home>/<name>.tgz`
    pub archive: PathBuf,
    /// `<home>/<name>-extract`
    pub scratch_dir: PathBuf,
    /// `<scratch>/bin/<name>`, where the archive layout puts the binary
    pub extracted_binary: PathBuf,
    /// `<home>/bin`
    pub bin_dir: PathBuf,
    /// `<home>/bin/<name>`
    pub binary: PathBuf,
}

impl InstallPaths {
    pub fn for_home(home: &Path, package_name: &str) -> Self {
        let scratch_dir = home.join(format!("{package_name}-extract"));
        let bin_dir = home.join("bin");
        Self {
            home: home.to_path_buf(),
            archive: home.join(format!("{package_name}.tgz")),
            extracted_binary: scratch_dir.join("bin").join(package_name),
            scratch_dir,
            binary: bin_dir.join(package_name),
            bin_dir,
        }
    }
}

/// The current user's home directory as reported by the OS, if any.
pub fn user_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Accept a looked-up home directory. Missing or empty is fatal.
pub fn resolve_home(found: Option<PathBuf>) -> Result<PathBuf> {
    found
        .filter(|home| !home.as_os_str().is_empty())
        .ok_or(InstallError::HomeDirUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_for_home() {
        let paths = InstallPaths::for_home(Path::new("/home/u"), "ollama");
        assert_eq!(paths.archive, PathBuf::from("/home/u/ollama.tgz"));
        assert_eq!(paths.scratch_dir, PathBuf::from("/home/u/ollama-extract"));
        assert_eq!(
            paths.extracted_binary,
            PathBuf::from("/home/u/ollama-extract/bin/ollama")
        );
        assert_eq!(paths.bin_dir, PathBuf::from("/home/u/bin"));
        assert_eq!(paths.binary, PathBuf::from("/home/u/bin/ollama"));
    }

    #[test]
    fn test_resolve_home_accepts_found_directory() {
        let home = resolve_home(Some(PathBuf::from("/home/u"))).unwrap();
        assert_eq!(home, PathBuf::from("/home/u"));
    }

    #[test]
    fn test_resolve_home_rejects_missing_or_empty() {
        assert!(matches!(
            resolve_home(None),
            Err(InstallError::HomeDirUnavailable)
        ));
        assert!(matches!(
            resolve_home(Some(PathBuf::new())),
            Err(InstallError::HomeDirUnavailable)
        ));
    }

    #[test]
    fn test_paths_are_stable_across_calls() {
        let a = InstallPaths::for_home(Path::new("/home/u"), "tool");
        let b = InstallPaths::for_home(Path::new("/home/u"), "tool");
        assert_eq!(a, b);
    }
}
