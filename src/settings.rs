use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::SETTINGS;

/// Name of the hidden directory under $HOME holding the settings file.
pub const SETTINGS_DIR_NAME: &str = concat!(".", env!("CARGO_PKG_NAME"));
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub log_file: String,
    /// Redraw interval while idle, drives the animations
    pub tick_rate_ms: u64,
    pub timing: TimingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: "app.log".to_string(),
            tick_rate_ms: 50,
            timing: TimingSettings::default(),
        }
    }
}

/// Durations of the simulated camera and upload work, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Each half of the shutter flash (fade in, fade out)
    pub flash_ms: u64,
    /// Pause after the flash before the photo is confirmed
    pub capture_settle_ms: u64,
    /// Time the fake upload bar takes to fill
    pub upload_ms: u64,
    /// Pause after the bar is full before the success card
    pub upload_settle_ms: u64,
    /// Screen fade/slide-in
    pub entrance_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            flash_ms: 100,
            capture_settle_ms: 200,
            upload_ms: 2000,
            upload_settle_ms: 200,
            entrance_ms: 300,
        }
    }
}

impl TimingSettings {
    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms * 2)
    }

    /// Shutter press until `CaptureComplete`.
    pub fn capture_delay(&self) -> Duration {
        self.flash() + Duration::from_millis(self.capture_settle_ms)
    }

    pub fn upload(&self) -> Duration {
        Duration::from_millis(self.upload_ms)
    }

    /// Overlay opening until `UploadComplete`.
    pub fn upload_delay(&self) -> Duration {
        self.upload() + Duration::from_millis(self.upload_settle_ms)
    }

    pub fn entrance(&self) -> Duration {
        Duration::from_millis(self.entrance_ms)
    }
}

/// Directory holding the settings file, `~/.flimmer-challenge`.
pub fn settings_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    Ok(home.join(SETTINGS_DIR_NAME))
}

/// Writes the default settings to `path` unless a file is already there.
pub fn ensure_settings_file(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(&Settings::default())?;
    fs::write(path, content).with_context(|| format!("Could not write {}", path.display()))?;
    log::info!("Created default settings at {}", path.display());
    Ok(())
}

/// Loads settings from `path`, creating it with defaults first if missing.
/// Keys absent from the file keep their default value.
pub fn load_settings_from_path(path: &Path) -> anyhow::Result<Settings> {
    ensure_settings_file(path)?;
    let cfg = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()))
        .build()
        .with_context(|| format!("Malformed settings file {}", path.display()))?;
    let settings = cfg
        .try_deserialize::<Settings>()
        .context("Error deserializing settings.toml")?;
    Ok(settings)
}

pub fn load_settings_from_disk() -> anyhow::Result<Settings> {
    load_settings_from_path(&settings_dir()?.join(SETTINGS_FILE_NAME))
}

/// Loads the settings once and keeps them for the rest of the process.
pub fn init_settings() -> anyhow::Result<&'static Settings> {
    if let Some(settings) = SETTINGS.get() {
        return Ok(settings);
    }
    let settings = load_settings_from_disk()?;
    Ok(SETTINGS.get_or_init(|| settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_add_settle_time() {
        let timing = TimingSettings::default();
        assert_eq!(timing.capture_delay(), Duration::from_millis(400));
        assert_eq!(timing.upload_delay(), Duration::from_millis(2200));
    }
}
