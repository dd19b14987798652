//! # Configuration
//!
//! Loaded with [`confique`], in priority order:
//! 1. **Environment variables**: `IPRHUB_LOG_LEVEL`, `IPRHUB_NORMALIZE_DEPARTMENTS`,
//!    `IPRHUB_RENDER_AFTER_MUTATION`.
//! 2. **Config file**: the path given with `--config`, otherwise `iprhub.toml` in
//!    the platform config directory (via `directories`) if it exists.
//! 3. **Compiled defaults**.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `log_level` | `warn` | Log filter when neither `RUST_LOG` nor `-v` is given |
//! | `normalize_departments` | `false` | Group summary departments ignoring case and surrounding spaces |
//! | `render_after_mutation` | `true` | Redraw listing and summary after every change |

use crate::commands::summary::DepartmentMatching;
use crate::error::{IprError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "iprhub.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IprConfig {
    /// Log filter directive, e.g. "warn" or "iprhub=debug".
    #[config(env = "IPRHUB_LOG_LEVEL", default = "warn")]
    pub log_level: String,

    /// Group "Physics" and " physics" together in the summary.
    #[config(env = "IPRHUB_NORMALIZE_DEPARTMENTS", default = false)]
    pub normalize_departments: bool,

    /// Redraw the listing and summary after each successful change.
    #[config(env = "IPRHUB_RENDER_AFTER_MUTATION", default = true)]
    pub render_after_mutation: bool,
}

impl Default for IprConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            normalize_departments: false,
            render_after_mutation: true,
        }
    }
}

impl IprConfig {
    /// Loads env + file + defaults. An explicit path must exist; the default
    /// location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) if !path.exists() => {
                return Err(IprError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file {} does not exist", path.display()),
                )));
            }
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        let mut builder = IprConfig::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn department_matching(&self) -> DepartmentMatching {
        if self.normalize_departments {
            DepartmentMatching::Normalized
        } else {
            DepartmentMatching::Exact
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("edu", "iprhub", "iprhub").map(|d| d.config_dir().join(CONFIG_FILENAME))
}
