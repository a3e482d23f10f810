//! Application configuration
//!
//! Loaded from YAML. Every field has a default, so an empty document is a
//! valid configuration.

use linkrank_algorithms::{PageRankConfig, RankError, ZeroDegreePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] RankError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where pages are read from, how they are ranked, where the result goes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkRankConfig {
    /// Directory holding the page files
    pub data_dir: PathBuf,
    /// Page file names, read in this order
    pub pages: Vec<String>,
    /// Prefix of the result shard file
    pub output_prefix: String,
    pub damping_factor: f64,
    pub iterations: usize,
    pub zero_degree: ZeroDegreePolicy,
}

impl Default for LinkRankConfig {
    fn default() -> Self {
        let engine = PageRankConfig::default();
        Self {
            data_dir: PathBuf::from("web04"),
            pages: ["go.md", "java.md", "python.md", "README.md"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            output_prefix: "linkrank-out".to_string(),
            damping_factor: engine.damping_factor,
            iterations: engine.iterations,
            zero_degree: engine.zero_degree,
        }
    }
}

impl LinkRankConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: LinkRankConfig = serde_yaml::from_str(yaml)?;
        config.page_rank_config().validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Reading configuration from {:?}", path);
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Engine settings carried by this configuration
    pub fn page_rank_config(&self) -> PageRankConfig {
        PageRankConfig {
            damping_factor: self.damping_factor,
            iterations: self.iterations,
            zero_degree: self.zero_degree,
        }
    }
}
