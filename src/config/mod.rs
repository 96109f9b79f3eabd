use crate::color::Notation;
use crate::palette::{ExportFormat, GeneratorMode, PALETTE_SIZE};
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub export: ExportConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Which generator new palettes come from
    pub mode: GeneratorMode,
    /// Number of colors in `random` mode
    pub count: usize,
    /// Fixed seed for reproducible sessions
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Token name used in exports (`--primary-500`, `$primary`, ...)
    pub token: String,
    /// Last export format shown on the shades screen
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Fade duration before a palette change commits (0 disables)
    pub transition_ms: u64,
    /// Notation the palette columns are labelled in
    pub notation: Notation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: GeneratorMode::Mixed,
            count: PALETTE_SIZE,
            seed: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            token: "primary".to_string(),
            format: ExportFormat::Css,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            transition_ms: 300,
            notation: Notation::Hex,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LogConfig {
    /// Parsed level, falling back to WARN on unknown names
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::WARN)
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(cfg, &path)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "swatch", "swatch").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Log file used while the TUI owns the terminal
pub fn default_log_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "swatch", "swatch").context("ProjectDirs unavailable")?;
    Ok(proj.data_dir().join("swatch.log"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    parse(&raw).with_context(|| format!("parse {}", path.display()))
}

fn parse(raw: &str) -> anyhow::Result<Config> {
    let cfg = toml::from_str::<Config>(raw)?;
    Ok(cfg)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
