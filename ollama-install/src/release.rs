use reqwest::Client;
use serde::Deserialize;

use crate::config::{HttpConfig, PackageConfig, PlatformConfig};
use crate::error::{InstallError, Result};

/// The only part of the release metadata we keep.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
}

/// Where the release archive for one platform can be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub url: String,
}

pub struct ReleaseResolver {
    http_client: Client,
    api_url: String,
}

impl ReleaseResolver {
    pub fn new(package: &PackageConfig, http: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(http.user_agent.as_str());
        if let Some(timeout) = http.timeout() {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| InstallError::Network {
            url: package.release_api.clone(),
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            http_client,
            api_url: package.release_api.clone(),
        })
    }

    /// Fetch the latest release tag. Single attempt, no retry.
    pub async fn latest(&self) -> Result<ReleaseInfo> {
        tracing::info!("Fetching latest release from {}", self.api_url);

        let response = self
            .http_client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| InstallError::Network {
                url: self.api_url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(InstallError::Network {
                url: self.api_url.clone(),
                message: format!("HTTP {status}: {}", error_text.trim()),
            });
        }

        let body = response.text().await.map_err(|e| InstallError::Network {
            url: self.api_url.clone(),
            message: format!("failed to read response body: {e}"),
        })?;

        parse_release(&self.api_url, &body)
    }
}

/// Decode a release metadata body, keeping only `tag_name`.
pub fn parse_release(url: &str, body: &str) -> Result<ReleaseInfo> {
    let release: ReleaseInfo = serde_json::from_str(body).map_err(|e| InstallError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    // An empty tag would yield `<base>//<asset>`, which can never download.
    if release.tag_name.is_empty() {
        return Err(InstallError::Decode {
            url: url.to_string(),
            reason: "tag_name is empty".to_string(),
        });
    }

    tracing::debug!("Resolved release tag {}", release.tag_name);
    Ok(release)
}

/// `<name>-<os>-<arch>.tgz`
pub fn asset_name(package: &PackageConfig, platform: &PlatformConfig) -> String {
    format!("{}-{}-{}.tgz", package.name, platform.os, platform.arch)
}

pub fn download_target(
    package: &PackageConfig,
    platform: &PlatformConfig,
    release: &ReleaseInfo,
) -> DownloadTarget {
    let base = package.download_base.trim_end_matches('/');
    DownloadTarget {
        url: format!(
            "{base}/{}/{}",
            release.tag_name,
            asset_name(package, platform)
        ),
    }
}
