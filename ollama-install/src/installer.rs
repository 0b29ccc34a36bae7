use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{InstallError, InstallWarning, Result};
use crate::paths::{self, InstallPaths};
use crate::process::{CommandRunner, Invocation, SystemRunner};
use crate::release::{self, DownloadTarget, ReleaseResolver};
use crate::shell::{PathUpdate, PathUpdater};
use crate::utils;

const DIR_MODE: u32 = 0o755;

/// Outcome of a successful install. Warnings never undo the install itself.
#[derive(Debug)]
pub struct InstallReport {
    /// Release tag, when the install went through release resolution
    pub version: Option<String>,
    pub binary_path: PathBuf,
    pub path_update: Option<PathUpdate>,
    pub warnings: Vec<InstallWarning>,
}

impl InstallReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

pub struct Installer<R = SystemRunner> {
    config: Config,
    runner: R,
    home: Option<PathBuf>,
    home_lookup: fn() -> Option<PathBuf>,
}

impl Installer {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Installer<R> {
    pub fn with_runner(config: Config, runner: R) -> Self {
        Self {
            config,
            runner,
            home: None,
            home_lookup: paths::user_home,
        }
    }

    /// Install relative to `home` instead of the current user's home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Replace the lookup used when no explicit home is set.
    pub fn with_home_lookup(mut self, lookup: fn() -> Option<PathBuf>) -> Self {
        self.home_lookup = lookup;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve the latest release, then download and install it.
    pub async fn run(&self) -> Result<InstallReport> {
        let resolver = ReleaseResolver::new(&self.config.package, &self.config.http)?;
        let release = resolver.latest().await?;

        let target =
            release::download_target(&self.config.package, &self.config.platform, &release);
        println!(
            "Latest {} version: {}",
            self.config.package.name, release.tag_name
        );

        let mut report = self.install(&target)?;
        report.version = Some(release.tag_name);
        Ok(report)
    }

    /// Download, extract and place the binary, then make sure `~/bin` is on PATH.
    ///
    /// Any failure up to and including `chmod` aborts without rolling back
    /// earlier steps. Cleanup and PATH problems only produce warnings.
    pub fn install(&self, target: &DownloadTarget) -> Result<InstallReport> {
        let home = paths::resolve_home(self.home.clone().or_else(self.home_lookup))?;
        let name = self.config.package.name.as_str();
        let paths = InstallPaths::for_home(&home, name);

        tracing::info!("Installing {} into {}", name, paths.bin_dir.display());

        self.download(&target.url, &paths.archive)?;

        utils::create_dir_all_with_mode(&paths.bin_dir, DIR_MODE).map_err(|e| {
            InstallError::filesystem(&paths.bin_dir, format!("failed to create bin directory: {e}"))
        })?;

        utils::reset_dir(&paths.scratch_dir, DIR_MODE).map_err(|e| {
            InstallError::filesystem(
                &paths.scratch_dir,
                format!("failed to prepare extraction directory: {e}"),
            )
        })?;

        self.extract(&paths.archive, &paths.scratch_dir)?;
        self.relocate(&paths.extracted_binary, &paths.binary)?;
        self.make_executable(&paths.binary)?;

        let mut warnings = cleanup(&paths);

        let path_update = match PathUpdater::new(&paths.home).ensure_on_path() {
            Ok(update) => Some(update),
            Err(e) => {
                tracing::info!("PATH update failed: {}", e);
                warnings.push(InstallWarning::PathUpdate(e));
                None
            }
        };

        println!("{} installed successfully to {}", name, paths.binary.display());
        println!("Please restart your terminal OR log out and log back in to use the new version");

        Ok(InstallReport {
            version: None,
            binary_path: paths.binary,
            path_update,
            warnings,
        })
    }

    fn download(&self, url: &str, archive: &Path) -> Result<()> {
        println!("Downloading {} from {}...", self.config.package.name, url);
        let invocation = Invocation::new("curl")
            .arg("-L")
            .arg("-#")
            .arg(url)
            .arg("-o")
            .arg(archive);

        self.execute(&invocation, |reason| InstallError::Download {
            url: url.to_string(),
            reason,
        })
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        println!("Extracting {} binary...", self.config.package.name);
        let invocation = Invocation::new("tar")
            .arg("-xzf")
            .arg(archive)
            .arg("-C")
            .arg(dest);

        self.execute(&invocation, |reason| InstallError::Extract {
            archive: archive.display().to_string(),
            reason,
        })
    }

    fn relocate(&self, from: &Path, to: &Path) -> Result<()> {
        let invocation = Invocation::new("mv").arg(from).arg(to);
        self.execute(&invocation, |reason| {
            InstallError::filesystem(to, format!("failed to move binary: {reason}"))
        })
    }

    fn make_executable(&self, binary: &Path) -> Result<()> {
        let invocation = Invocation::new("chmod").arg("+x").arg(binary);
        self.execute(&invocation, |reason| {
            InstallError::filesystem(binary, format!("failed to make executable: {reason}"))
        })
    }

    /// Run one external step, turning spawn failures and non-zero exits into
    /// the step's error kind.
    fn execute<F>(&self, invocation: &Invocation, on_failure: F) -> Result<()>
    where
        F: FnOnce(String) -> InstallError,
    {
        match self.runner.run(invocation) {
            Ok(outcome) if outcome.is_success() => Ok(()),
            Ok(outcome) => {
                let reason = format!("{} {}", invocation.program, outcome.describe());
                tracing::error!("{}", reason);
                Err(on_failure(reason))
            }
            Err(e) => {
                let reason = format!("failed to start {}: {e}", invocation.program);
                tracing::error!("{}", reason);
                Err(on_failure(reason))
            }
        }
    }
}

/// Remove the archive and scratch directory, collecting failures as warnings.
fn cleanup(paths: &InstallPaths) -> Vec<InstallWarning> {
    [&paths.archive, &paths.scratch_dir]
        .into_iter()
        .filter_map(|path| match utils::remove_path(path) {
            Ok(()) => None,
            Err(e) => {
                tracing::info!("Failed to remove {}: {}", path.display(), e);
                Some(InstallWarning::Cleanup {
                    path: path.clone(),
                    reason: e.to_string(),
                })
            }
        })
        .collect()
}
