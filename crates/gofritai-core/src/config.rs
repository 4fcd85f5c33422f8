use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FritError, Result};
use crate::monitor::MonitorPlan;

/// User configuration from `<config_dir>/gofritai/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalogue file to use instead of the bundled one.
    pub catalog: Option<PathBuf>,
    pub monitor: MonitorPlan,
}

/// Return the default config file path, if a config directory is available.
pub fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("gofritai").join("config.toml"))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .map_err(|e| FritError::Io(format!("{}: {e}", p.display())))?;
                Self::parse(&content)
            }
            None => match default_path() {
                Some(p) if p.exists() => {
                    tracing::debug!(path = %p.display(), "reading config");
                    let content = std::fs::read_to_string(&p)
                        .map_err(|e| FritError::Io(format!("{}: {e}", p.display())))?;
                    Self::parse(&content)
                }
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse and validate a config TOML string.
    pub fn parse(toml_str: &str) -> Result<Self> {
        let cfg: Config =
            toml::from_str(toml_str).map_err(|e| FritError::Config(e.to_string()))?;
        cfg.monitor.validate()?;
        Ok(cfg)
    }

    /// Pick the catalogue file: explicit flag first, then config.
    pub fn catalog_path<'a>(&'a self, flag: Option<&'a Path>) -> Option<&'a Path> {
        flag.or(self.catalog.as_deref())
    }
}
