use super::DataStore;
use crate::document::PetDocument;
use crate::error::{PetcareError, Result};
use serde_json::Value;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Value>,
    fail_reads: bool,
    reject_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given raw records, as if they had been read from disk.
    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Every load fails, like a corrupt or unreadable document.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every save fails, like a read-only or full disk.
    pub fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_records(&self) -> Result<Vec<Value>> {
        if self.fail_reads {
            return Err(PetcareError::Store("document is unreadable".to_string()));
        }
        Ok(self.records.clone())
    }

    fn save_records(&mut self, records: &[PetDocument]) -> Result<()> {
        if self.reject_writes {
            return Err(PetcareError::Store("storage is read-only".to_string()));
        }
        self.records = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<Value>, _>>()
            .map_err(PetcareError::Serialization)?;
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Pet, Species};
    use crate::pet_store::PetStore;
    use chrono::NaiveDate;

    pub fn fixture_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    pub struct StoreFixture {
        pub store: PetStore<InMemoryStore>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: PetStore::open(InMemoryStore::new()),
            }
        }

        pub fn with_dog(mut self, name: &str) -> Self {
            self.store
                .add(Pet::new(Species::dog(), name, 3, fixture_date()));
            self
        }

        pub fn with_cat(mut self, name: &str) -> Self {
            self.store
                .add(Pet::new(Species::cat(), name, 2, fixture_date()));
            self
        }

        pub fn with_bird(mut self, name: &str) -> Self {
            self.store
                .add(Pet::new(Species::bird(), name, 1, fixture_date()));
            self
        }
    }
}
