//! # Pet Store
//!
//! [`PetStore`] owns every [`Pet`] and is the only way to change them. The
//! collection is write-through: each mutating call persists the whole
//! collection before it returns.
//!
//! Storage problems never surface as errors from the store:
//!
//! - **Load**: a missing document means an empty store. An unreadable document
//!   also yields an empty store, and each record that fails to decode is
//!   skipped on its own.
//! - **Persist**: a failed write leaves memory untouched and authoritative. The
//!   store reports itself unsynced until the next successful write.
//!
//! Both cases are logged and queued as warnings, which callers drain with
//! [`PetStore::take_warnings`].

use crate::document::PetDocument;
use crate::error::{PetcareError, Result};
use crate::model::{Pet, PetOverdue};
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::{debug, warn};

pub struct PetStore<S: DataStore> {
    backend: S,
    pets: Vec<Pet>,
    synced: bool,
    warnings: Vec<String>,
}

impl<S: DataStore> PetStore<S> {
    /// Creates the store and loads whatever the backend holds.
    pub fn open(backend: S) -> Self {
        let mut store = Self {
            backend,
            pets: Vec::new(),
            synced: true,
            warnings: Vec::new(),
        };
        store.load();
        store
    }

    /// Replaces the in-memory collection with the backend's contents.
    pub fn load(&mut self) {
        self.pets.clear();

        let records = match self.backend.load_records() {
            Ok(records) => records,
            Err(e) => {
                self.warn(format!("Error loading data: {}", e));
                return;
            }
        };

        for (position, record) in records.into_iter().enumerate() {
            let decoded = PetDocument::from_value(record).and_then(|doc| {
                let note = doc.size_warning();
                Pet::from_document(doc).map(|pet| (pet, note))
            });
            match decoded {
                Ok((pet, note)) => {
                    if let Some(note) = note {
                        self.warn(format!("Pet record {}: {}", position + 1, note));
                    }
                    self.pets.push(pet);
                }
                Err(e) => self.warn(format!("Skipped pet record {}: {}", position + 1, e)),
            }
        }
        debug!(count = self.pets.len(), "loaded pets");
    }

    /// Writes the whole collection. Returns whether the write succeeded.
    pub fn persist(&mut self) -> bool {
        let documents: Vec<_> = self.pets.iter().map(Pet::to_document).collect();
        match self.backend.save_records(&documents) {
            Ok(()) => {
                self.synced = true;
                true
            }
            Err(e) => {
                self.synced = false;
                self.warn(format!("Error saving data: {}", e));
                false
            }
        }
    }

    pub fn add(&mut self, pet: Pet) {
        self.pets.push(pet);
        self.persist();
    }

    /// Removes every pet called `name` and returns how many went.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.pets.len();
        self.pets.retain(|pet| pet.name != name);
        let removed = before - self.pets.len();
        self.persist();
        removed
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.name == name)
    }

    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.pets.iter().position(|pet| pet.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Pet> {
        self.pets.get(index)
    }

    /// Applies `f` to the pet at `index` (0-based) and persists if it succeeds.
    pub fn update<T, F>(&mut self, index: usize, f: F) -> Result<T>
    where
        F: FnOnce(&mut Pet) -> Result<T>,
    {
        let pet = self
            .pets
            .get_mut(index)
            .ok_or_else(|| PetcareError::PetNotFound(format!("#{}", index + 1)))?;
        let value = f(pet)?;
        self.persist();
        Ok(value)
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Every overdue task across all pets, in collection then schedule order.
    pub fn all_overdue(&self, reference: NaiveDate) -> Vec<PetOverdue> {
        self.pets
            .iter()
            .flat_map(|pet| {
                pet.overdue_tasks(reference)
                    .into_iter()
                    .map(move |overdue| PetOverdue {
                        pet_name: pet.name.clone(),
                        task: overdue.task,
                        days_overdue: overdue.days_overdue,
                    })
            })
            .collect()
    }

    /// False after a failed persist, until the next successful one.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }
}
