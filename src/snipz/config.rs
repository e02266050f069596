use crate::commands::query::SortOrder;
use crate::error::{Result, SnipzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:3000/tools/code-snippets";

pub const CONFIG_KEYS: &[&str] = &["share-base-url", "default-sort", "seed-samples"];

/// Configuration for snipz, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Page that share links point at; the payload goes in its `share` parameter.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Ordering used by `list` when none is given.
    #[serde(default)]
    pub default_sort: SortOrder,

    /// Populate a brand-new library with the sample snippets.
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_seed_samples() -> bool {
    true
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            default_sort: SortOrder::default(),
            seed_samples: default_seed_samples(),
        }
    }
}

impl SnipzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SnipzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "share-base-url" => Some(self.share_base_url.clone()),
            "default-sort" => Some(self.default_sort.to_string()),
            "seed-samples" => Some(self.seed_samples.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "share-base-url" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(SnipzError::Config(
                        "share-base-url cannot be empty".to_string(),
                    ));
                }
                self.share_base_url = trimmed.to_string();
            }
            "default-sort" => {
                self.default_sort = value.parse().map_err(SnipzError::Config)?;
            }
            "seed-samples" => {
                self.seed_samples = value.parse().map_err(|_| {
                    SnipzError::Config(format!(
                        "seed-samples expects true or false, got '{}'",
                        value
                    ))
                })?;
            }
            other => {
                return Err(SnipzError::Config(format!(
                    "unknown config key '{}' (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
