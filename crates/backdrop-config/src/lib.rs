//! Configuration file handling for backdrop.
//!
//! Settings live in `<config_dir>/backdrop/config.toml`. A missing file
//! yields the defaults; a malformed one is reported with its path.

use std::fs;
use std::path::{Path, PathBuf};

use backdrop_core::{Scene, Size, Theme};
use color_eyre::eyre::{Result, WrapErr, eyre};
use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Background shown at startup.
    pub scene: Scene,
    /// Page theme.
    pub theme: Theme,
    /// Width of one terminal cell in surface units.
    pub cell_width_px: u16,
    /// Height of one terminal cell in surface units.
    pub cell_height_px: u16,
    /// Time between repaints.
    pub frame_interval_ms: u64,
    /// Fixed random seed for repeatable animations.
    pub seed: Option<u64>,
    /// Whether the headline and counters are drawn over the background.
    pub show_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: Scene::default(),
            theme: Theme::default(),
            cell_width_px: 8,
            cell_height_px: 16,
            frame_interval_ms: 16,
            seed: None,
            show_stats: true,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML contents, checking value ranges.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.cell_width_px == 0 || self.cell_height_px == 0 {
            return Err(eyre!("cell_width_px and cell_height_px must be positive"));
        }
        if self.frame_interval_ms == 0 {
            return Err(eyre!("frame_interval_ms must be positive"));
        }
        Ok(())
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).wrap_err("failed to serialize config")?;
        fs::write(path, contents)
            .wrap_err_with(|| format!("failed to write config file {}", path.display()))?;
        debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Surface size, in device-independent units, of a terminal area.
    pub fn surface_size(&self, columns: u16, rows: u16) -> Size {
        Size::new(
            f64::from(columns) * f64::from(self.cell_width_px),
            f64::from(rows) * f64::from(self.cell_height_px),
        )
    }
}

/// Directory for runtime data such as the log file.
pub fn data_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "backdrop").ok_or_else(|| eyre!("could not determine home directory"))
}
