use crate::error::{MarinaError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "BoatData.csv";
const DEFAULT_NAME_WIDTH: usize = 20;

/// Configuration for marina, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MarinaConfig {
    /// Data file used when none is given on the command line
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Width of the name column in the inventory listing
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

impl Default for MarinaConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            name_width: default_name_width(),
        }
    }
}

impl MarinaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MarinaError::Io)?;
        let config: MarinaConfig = serde_json::from_str(&content).map_err(|e| {
            MarinaError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(MarinaError::Config("data_file cannot be empty".to_string()));
        }
        if self.name_width == 0 {
            return Err(MarinaError::Config(
                "name_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
