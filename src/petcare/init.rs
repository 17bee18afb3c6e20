use crate::api::{PetCareApi, PetcarePaths};
use crate::config::PetcareConfig;
use crate::store::fs::FileStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DATA_DIR_ENV: &str = "PETCARE_HOME";
const DEFAULT_DATA_DIR: &str = "data";

pub struct PetcareContext {
    pub api: PetCareApi<FileStore>,
    pub config: PetcareConfig,
}

/// Picks the data directory: an explicit override first, then `PETCARE_HOME`,
/// then `data/` under `cwd`.
pub fn resolve_data_dir(cwd: &Path, data_override: Option<PathBuf>) -> PathBuf {
    data_override
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .map(|dir| if dir.is_relative() { cwd.join(dir) } else { dir })
        .unwrap_or_else(|| cwd.join(DEFAULT_DATA_DIR))
}

/// Resolves the data directory, creating it if absent, and wires the API to it.
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> PetcareContext {
    let data_dir = resolve_data_dir(cwd, data_override);
    if let Err(e) = fs::create_dir_all(&data_dir) {
        warn!("Could not create data directory {}: {}", data_dir.display(), e);
    }

    let config = PetcareConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("Ignoring unreadable config: {}", e);
        PetcareConfig::default()
    });

    let store = FileStore::new(data_dir.clone()).with_file_name(&config.data_file);
    let paths = PetcarePaths { data_dir };
    let api = PetCareApi::new(store, paths);

    PetcareContext { api, config }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_wins() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_data_dir(temp.path(), Some(PathBuf::from("elsewhere")));
        assert_eq!(dir, temp.path().join("elsewhere"));

        let absolute = temp.path().join("abs");
        assert_eq!(resolve_data_dir(Path::new("/tmp"), Some(absolute.clone())), absolute);
    }

    #[test]
    fn initialize_uses_configured_data_file() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("data");
        let mut config = PetcareConfig::default();
        config.set("data-file", "zoo.json").unwrap();
        config.save(&data_dir).unwrap();
        fs::write(
            data_dir.join("zoo.json"),
            r#"[{"type": "Cat", "name": "Tom", "age": 2, "breed": "Tabby"}]"#,
        )
        .unwrap();

        let ctx = initialize(temp.path(), Some(data_dir));
        assert_eq!(ctx.config.data_file, "zoo.json");
        assert_eq!(ctx.api.store().len(), 1);
    }

    #[test]
    fn initialize_creates_missing_data_dir() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path(), Some(temp.path().join("data")));
        assert!(ctx.api.store().is_empty());
        assert!(temp.path().join("data").is_dir());
        assert!(!temp.path().join("data").join("pets_data.json").exists());
    }
}
