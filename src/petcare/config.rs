use crate::error::{PetcareError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECENT_HEALTH_RECORDS: usize = 3;

/// Configuration for petcare, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetcareConfig {
    /// Name of the pets document inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// How many of the latest health records the task view shows
    #[serde(default = "default_recent_health_records")]
    pub recent_health_records: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_recent_health_records() -> usize {
    DEFAULT_RECENT_HEALTH_RECORDS
}

impl Default for PetcareConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            recent_health_records: DEFAULT_RECENT_HEALTH_RECORDS,
        }
    }
}

impl PetcareConfig {
    pub const KEYS: &'static [&'static str] = &["data-file", "recent-health-records"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PetcareError::Io)?;
        let config: PetcareConfig =
            serde_json::from_str(&content).map_err(PetcareError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PetcareError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PetcareError::Serialization)?;
        fs::write(config_path, content).map_err(PetcareError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "recent-health-records" => Some(self.recent_health_records.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains('/') || value.contains('\\') {
                    return Err(format!("Invalid data file name: {}", value));
                }
                self.data_file = value.to_string();
                Ok(())
            }
            "recent-health-records" => {
                self.recent_health_records = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Expected a number for {}, got {}", key, value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PetcareConfig::default();
        assert_eq!(config.data_file, "pets_data.json");
        assert_eq!(config.recent_health_records, 3);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = PetcareConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, PetcareConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = PetcareConfig::default();
        config.set("recent-health-records", "5").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = PetcareConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.recent_health_records, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"data_file": "zoo.json"}"#).unwrap();

        let loaded = PetcareConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, "zoo.json");
        assert_eq!(loaded.recent_health_records, 3);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PetcareConfig::default();
        assert!(config.set("recent-health-records", "lots").is_err());
        assert!(config.set("data-file", "../escape.json").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, PetcareConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = PetcareConfig::default();
        for key in PetcareConfig::KEYS {
            assert!(config.get(key).is_some(), "{}", key);
        }
        assert_eq!(config.get("nope"), None);
    }
}
