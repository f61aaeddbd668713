use crate::commands::export::DEFAULT_OUTPUT_STEM;
use crate::error::{ExportError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_OUTPUT_TYPE: &str = "html";

/// Overrides the config directory, mostly for tests and scripted runs.
pub const CONFIG_DIR_ENV: &str = "MCEXPORT_CONFIG_DIR";

/// User defaults for the exporter, stored in `config.json`.
///
/// Command-line flags take precedence over every field here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Output type used when `--output-type` is not given.
    #[serde(default = "default_output_type")]
    pub output_type: String,

    /// File stem used with `--output` when `--output-path` is not given.
    #[serde(default = "default_output_stem")]
    pub output_stem: String,

    /// Skip trashed snippets unless asked otherwise.
    #[serde(default)]
    pub exclude_deleted: bool,
}

fn default_output_type() -> String {
    DEFAULT_OUTPUT_TYPE.to_string()
}

fn default_output_stem() -> String {
    DEFAULT_OUTPUT_STEM.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_type: default_output_type(),
            output_stem: default_output_stem(),
            exclude_deleted: false,
        }
    }
}

impl ExportConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ExportError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            ExportError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ExportError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ExportError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(ExportError::Io)?;
        Ok(())
    }
}

/// `$MCEXPORT_CONFIG_DIR` if set, else the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "mcexport", "mcexport")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExportError::Config("could not determine config directory".to_string()))
}
