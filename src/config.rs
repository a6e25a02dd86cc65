use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event polling interval in milliseconds
    pub tick_rate_ms: u64,
    /// Name of the tab shown at start-up
    pub initial_tab: String,
    /// Column key to sort ascending by at start-up
    pub default_sort: Option<String>,
    /// Log filter used when `AEM_TUI_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            initial_tab: "AEM".to_string(),
            default_sort: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".aem-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("aem-tui.log"))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Read the config file. `Ok(None)` when there is no file yet.
    pub fn load() -> anyhow::Result<Option<Config>> {
        match Self::config_path() {
            Some(path) => Self::load_at(&path),
            None => Ok(None),
        }
    }

    fn load_at(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    /// Load the config, falling back to the defaults.
    ///
    /// Runs before logging is installed, so the reason a file was ignored is
    /// handed back to the caller instead of being logged here.
    pub fn load_or_default() -> (Config, Option<anyhow::Error>) {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: anyhow::Result<Option<Config>>) -> (Config, Option<anyhow::Error>) {
        match loaded {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse {}", path.display()))?;
        Ok(config)
    }

    /// Write the config on first run. An existing file is left alone, even
    /// a malformed one.
    pub fn save_if_missing(&self) -> anyhow::Result<bool> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_if_missing_at(&config_path)
    }

    fn save_if_missing_at(&self, path: &Path) -> anyhow::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        self.save_to(path)?;
        Ok(true)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Could not write {}", path.display()))?;
        Ok(())
    }
}
