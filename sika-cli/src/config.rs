use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sika_core::EngineConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use crate::paths::config_path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogSection,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// CSV or JSON catalog used when no --csv/--json flag is given.
    /// Unset means the built-in demo data.
    pub path: Option<PathBuf>,
}

impl Config {
    /// A missing file is the default config; a present but broken one is an error.
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
        };
        toml::from_str(&text).with_context(|| format!("parse {}", path.display()))
    }

    /// Writes the file, creating parent directories; returns false and leaves
    /// the file alone when it already exists.
    pub fn write_new(&self, path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        fs::write(path, render_config(self)?).with_context(|| format!("write {}", path.display()))?;
        Ok(true)
    }
}

pub fn load_config() -> Result<Config> {
    Config::read_from(&config_path()?)
}

/// `sika config init`
pub fn init_config() -> Result<()> {
    let path = config_path()?;
    if Config::default().write_new(&path)? {
        println!("Wrote {}", path.display());
    } else {
        println!("Config already exists: {}", path.display());
    }
    Ok(())
}

pub fn render_config(cfg: &Config) -> Result<String> {
    toml::to_string_pretty(cfg).context("serialize config")
}
