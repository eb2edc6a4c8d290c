//! File logging. The terminal belongs to the UI, so log records go to
//! `<data_dir>/backdrop.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use env_logger::{Builder, Env, Target};

const LOG_FILE: &str = "backdrop.log";

/// Install the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<PathBuf> {
    let dir = backdrop_config::data_dir()?;
    fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("failed to create data directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(path)
}
