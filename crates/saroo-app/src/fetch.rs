// Roster retrieval from Data Dragon or from local champion.json files.
//
// The loader runs once at startup on its own task and reports a single
// `RosterEvent` to the app event loop.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use saroo_core::ddragon;
use saroo_core::roster::Roster;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::RosterConfig;
use crate::protocol::RosterEvent;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

// ---------------------------------------------------------------------------
// RosterSource
// ---------------------------------------------------------------------------

/// Something that can produce the champion roster.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<Roster>;

    /// Short human-readable origin, shown in the status bar.
    fn describe(&self) -> String;
}

/// Pick the source the config asks for: local files when `roster.file` is
/// set, Data Dragon otherwise.
pub fn source_from_config(config: &RosterConfig) -> anyhow::Result<Box<dyn RosterSource>> {
    match &config.file {
        Some(path) => Ok(Box::new(LocalFile {
            path: path.clone(),
            canonical_path: config.canonical_file.clone(),
            image_base: config
                .version
                .as_deref()
                .map(|version| ddragon::image_base(&config.cdn_base, version)),
            locale: config.locale.clone(),
        })),
        None => Ok(Box::new(DataDragon::new(config.clone())?)),
    }
}

/// Load the roster from `source` and report the outcome on `tx`.
pub async fn load_roster(source: &dyn RosterSource, tx: mpsc::Sender<RosterEvent>) {
    info!("Loading roster from {}", source.describe());
    let event = match source.load().await {
        Ok(roster) => {
            info!("Roster loaded: {} champions", roster.len());
            RosterEvent::Loaded(roster)
        }
        Err(e) => {
            warn!("Roster load failed: {:#}", e);
            RosterEvent::Failed(format!("{e:#}"))
        }
    };
    let _ = tx.send(event).await;
}

// ---------------------------------------------------------------------------
// DataDragon
// ---------------------------------------------------------------------------

/// Fetches `versions.json` and `champion.json` over HTTP.
pub struct DataDragon {
    http: reqwest::Client,
    config: RosterConfig,
}

impl DataDragon {
    pub fn new(config: RosterConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(DataDragon { http, config })
    }

    async fn get_text(&self, url: &str) -> anyhow::Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("request to {url} was rejected"))?;
        response
            .text()
            .await
            .with_context(|| format!("failed to read body of {url}"))
    }

    /// The pinned version, or the newest one Data Dragon lists.
    async fn resolve_version(&self) -> anyhow::Result<String> {
        if let Some(version) = &self.config.version {
            return Ok(version.clone());
        }
        let body = self.get_text(&self.config.versions_url).await?;
        let version = ddragon::latest_version(&body).context("bad versions.json")?;
        info!("Latest Data Dragon version is {}", version);
        Ok(version)
    }

    /// Fetch the canonical-locale file. Failure only costs the romanized
    /// names, so it is logged and skipped.
    async fn canonical_json(&self, version: &str) -> Option<String> {
        let locale = self.config.canonical_locale.as_deref()?;
        if locale == self.config.locale {
            return None;
        }
        let url = ddragon::champion_data_url(&self.config.cdn_base, version, locale);
        match self.get_text(&url).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Canonical names unavailable ({}): {:#}", locale, e);
                None
            }
        }
    }
}

#[async_trait]
impl RosterSource for DataDragon {
    async fn load(&self) -> anyhow::Result<Roster> {
        let version = self.resolve_version().await?;
        let url = ddragon::champion_data_url(&self.config.cdn_base, &version, &self.config.locale);
        let localized = self.get_text(&url).await?;
        let canonical = self.canonical_json(&version).await;

        let champions = ddragon::decode_champions(
            &localized,
            canonical.as_deref(),
            Some(&ddragon::image_base(&self.config.cdn_base, &version)),
            &self.config.locale,
        )
        .with_context(|| format!("bad champion data at {url}"))?;

        Ok(Roster::from_champions(champions))
    }

    fn describe(&self) -> String {
        let version = self.config.version.as_deref().unwrap_or("latest");
        format!("Data Dragon {} ({})", version, self.config.locale)
    }
}

// ---------------------------------------------------------------------------
// LocalFile
// ---------------------------------------------------------------------------

/// Reads champion.json files from disk.
pub struct LocalFile {
    pub path: PathBuf,
    pub canonical_path: Option<PathBuf>,
    /// Portrait URL prefix. Only known when a version is pinned.
    pub image_base: Option<String>,
    pub locale: String,
}

#[async_trait]
impl RosterSource for LocalFile {
    async fn load(&self) -> anyhow::Result<Roster> {
        let localized = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        let canonical = match &self.canonical_path {
            Some(path) => Some(
                tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?,
            ),
            None => None,
        };

        let champions = ddragon::decode_champions(
            &localized,
            canonical.as_deref(),
            self.image_base.as_deref(),
            &self.locale,
        )
        .with_context(|| format!("bad champion data in {}", self.path.display()))?;

        Ok(Roster::from_champions(champions))
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.path.display(), self.locale)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
