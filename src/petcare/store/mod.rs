//! # Storage Layer
//!
//! This module defines the storage abstraction for petcare. The [`DataStore`]
//! trait moves the raw pet records between memory and a backend; turning those
//! records into [`Pet`](crate::model::Pet)s and deciding what to do with bad
//! ones is the job of [`PetStore`](crate::pet_store::PetStore).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All pets in one JSON array (`pets_data.json` by default)
//!   - Every save rewrites the whole file through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to reject writes, to exercise the stale-store path
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//! ├── pets_data.json      # All pets (JSON array)
//! └── config.json         # Configuration
//! ```
//!
//! Records are handed out as untyped JSON values so that one malformed record
//! cannot make the whole document unreadable.

use crate::document::PetDocument;
use crate::error::Result;
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Abstract interface for pet record storage.
pub trait DataStore {
    /// Read every stored record. A backend with nothing stored yet returns an
    /// empty list.
    fn load_records(&self) -> Result<Vec<Value>>;

    /// Replace the stored records with `records`.
    fn save_records(&mut self, records: &[PetDocument]) -> Result<()>;
}
