use super::DataStore;
use crate::document::PetDocument;
use crate::error::{PetcareError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "pets_data.json";

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn temp_path(&self) -> PathBuf {
        self.root.join(format!(".{}.tmp", self.file_name))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PetcareError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_records(&self) -> Result<Vec<Value>> {
        let path = self.data_path();
        if !path.exists() {
            debug!(path = %path.display(), "no data file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(PetcareError::Io)?;
        let records: Vec<Value> =
            serde_json::from_str(&content).map_err(PetcareError::Serialization)?;
        debug!(path = %path.display(), count = records.len(), "read pet records");
        Ok(records)
    }

    fn save_records(&mut self, records: &[PetDocument]) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(records).map_err(PetcareError::Serialization)?;

        // Write next to the target, then swap it in, so a crash never leaves half a file.
        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(PetcareError::Io)?;
        if let Err(e) = fs::rename(&temp_path, self.data_path()) {
            let _ = fs::remove_file(&temp_path);
            return Err(PetcareError::Io(e));
        }

        debug!(path = %self.data_path().display(), count = records.len(), "wrote pet records");
        Ok(())
    }
}
