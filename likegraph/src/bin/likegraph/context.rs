use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use likegraph::{CaseMode, DEFAULT_INFLUENCER_THRESHOLD};

use crate::output::OutputFormat;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "likegraph.toml";

/// Configuration stored in likegraph.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikegraphConfig {
    #[serde(default)]
    pub graph: GraphSettings,
    #[serde(default)]
    pub moderation: ModerationSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSettings {
    #[serde(default = "default_influencer_threshold")]
    pub influencer_threshold: usize,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            influencer_threshold: default_influencer_threshold(),
        }
    }
}

fn default_influencer_threshold() -> usize {
    DEFAULT_INFLUENCER_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationSettings {
    /// One flagged term per line; `${VAR}` expands from the environment.
    #[serde(default)]
    pub terms_file: Option<String>,
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

impl Default for ModerationSettings {
    fn default() -> Self {
        Self {
            terms_file: None,
            case_insensitive: default_case_insensitive(),
        }
    }
}

fn default_case_insensitive() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Used when `--output` is not given
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

/// Resolved configuration plus where it came from.
pub struct AppContext {
    /// Directory relative paths in the config resolve against
    pub base_dir: PathBuf,
    /// Path the config was read from, if any
    pub config_path: Option<PathBuf>,
    pub config: LikegraphConfig,
}

impl AppContext {
    /// Load the explicit config file, or `likegraph.toml` in the current
    /// directory when present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let current_dir = std::env::current_dir().context("Failed to get current directory")?;
                let candidate = current_dir.join(CONFIG_FILE_NAME);
                if candidate.exists() {
                    Self::from_file(&candidate)
                } else {
                    Ok(Self {
                        base_dir: current_dir,
                        config_path: None,
                        config: LikegraphConfig::default(),
                    })
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: LikegraphConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self {
            base_dir,
            config_path: Some(path.to_path_buf()),
            config,
        })
    }

    pub fn case_mode(&self) -> CaseMode {
        if self.config.moderation.case_insensitive {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }

    /// Get the flagged-terms path, expanding environment variables
    pub fn terms_path(&self) -> Result<Option<PathBuf>> {
        let Some(raw) = self.config.moderation.terms_file.as_deref() else {
            return Ok(None);
        };

        let expanded = if raw.starts_with("${") && raw.ends_with('}') {
            let var_name = &raw[2..raw.len() - 1];
            std::env::var(var_name).with_context(|| format!("Environment variable {var_name} not set"))?
        } else {
            raw.to_string()
        };

        Ok(Some(self.base_dir.join(expanded)))
    }
}
