//! File logging
//!
//! The terminal belongs to the UI, so log records go to a file in the config
//! directory. `AEM_TUI_LOG` overrides the configured filter.

use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "AEM_TUI_LOG";

/// `env_value` wins over `default_level`; anything unparsable falls through
/// to `info`.
fn build_filter(env_value: Option<&str>, default_level: &str) -> EnvFilter {
    env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`
pub fn init_at(path: &Path, default_level: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(env::var(LOG_ENV).ok().as_deref(), default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Could not install logger: {}", e))?;

    Ok(())
}

/// Install file logging in the default location
pub fn init(config: &Config) -> Result<()> {
    let path = Config::log_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine log file path"))?;
    init_at(&path, &config.log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(build_filter(Some("trace"), "warn").to_string(), "trace");
        assert_eq!(build_filter(None, "warn").to_string(), "warn");
    }

    #[test]
    fn test_invalid_levels_fall_back() {
        assert_eq!(build_filter(Some("aem_tui=loud"), "debug").to_string(), "debug");
        assert_eq!(build_filter(None, "aem_tui=loud").to_string(), "info");
    }

    #[test]
    fn test_init_creates_log_file() {
        let path = env::temp_dir()
            .join(format!("aem-tui-log-{}", std::process::id()))
            .join("nested")
            .join("aem-tui.log");
        let _ = fs::remove_file(&path);

        init_at(&path, "info").unwrap();
        tracing::warn!("log file smoke test");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("log file smoke test"));
        let _ = fs::remove_file(&path);
    }
}
