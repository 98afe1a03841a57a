use crate::error::{Result, RollcallError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ROSTER_FILE: &str = "roster.json";

/// Configuration for rollcall, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollcallConfig {
    /// File name of the roster inside the data directory
    #[serde(default = "default_roster_file")]
    pub roster_file: String,

    /// Start with an empty roster instead of aborting when the roster file can't be loaded
    #[serde(default)]
    pub start_empty_on_load_error: bool,
}

fn default_roster_file() -> String {
    DEFAULT_ROSTER_FILE.to_string()
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            roster_file: default_roster_file(),
            start_empty_on_load_error: false,
        }
    }
}

impl RollcallConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let config_path = data_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollcallError::Io)?;
        let config: RollcallConfig =
            serde_json::from_str(&content).map_err(RollcallError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();

        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(RollcallError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(RollcallError::Serialization)?;
        fs::write(data_dir.join(CONFIG_FILENAME), content).map_err(RollcallError::Io)?;
        Ok(())
    }

    pub fn roster_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.roster_file)
    }
}
