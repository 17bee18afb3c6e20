//! # Persisted Record Format
//!
//! Each pet is stored as one flat JSON object. The `type` field selects the
//! variant and the variant's single attribute sits at the top level next to the
//! common fields:
//!
//! ```text
//! {
//!   "type": "Dog",
//!   "name": "Rex",
//!   "age": 3,
//!   "breed": "Unknown",
//!   "care_schedule": [ { "task": "Walk", "frequency_days": 1, "last_done": "2024-05-01" } ],
//!   "health_records": [ { "type": "Vaccination", "description": "Rabies shot", "date": "2024-05-01" } ],
//!   "size": "Medium"
//! }
//! ```
//!
//! `care_schedule` and `health_records` may be absent (treated as empty), and a
//! missing variant attribute falls back to the variant's default. A `size` that
//! names no known size, in any letter case, also falls back to `Medium`; see
//! [`PetDocument::size_warning`]. `type`, `name`, `age` and `breed` are required.

use crate::error::{PetcareError, Result};
use crate::model::{CareTask, DogSize, HealthRecord, Pet, Species};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub age: u32,
    pub breed: String,
    #[serde(default)]
    pub care_schedule: Vec<CareTask>,
    #[serde(default)]
    pub health_records: Vec<HealthRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indoor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_fly: Option<bool>,
}

impl Pet {
    pub fn to_document(&self) -> PetDocument {
        let mut doc = PetDocument {
            kind: self.kind().to_string(),
            name: self.name.clone(),
            age: self.age,
            breed: self.breed.clone(),
            care_schedule: self.care_schedule.clone(),
            health_records: self.health_records.clone(),
            size: None,
            indoor: None,
            can_fly: None,
        };
        match self.species {
            Species::Dog { size } => doc.size = Some(size.to_string()),
            Species::Cat { indoor } => doc.indoor = Some(indoor),
            Species::Bird { can_fly } => doc.can_fly = Some(can_fly),
        }
        doc
    }

    /// Rebuilds a pet from its record. The stored schedule replaces the
    /// defaults a fresh pet would get.
    pub fn from_document(doc: PetDocument) -> Result<Pet> {
        let species = match doc.kind.as_str() {
            "Dog" => Species::Dog {
                size: doc
                    .size
                    .as_deref()
                    .and_then(|size| size.parse::<DogSize>().ok())
                    .unwrap_or_default(),
            },
            "Cat" => Species::Cat {
                indoor: doc.indoor.unwrap_or(true),
            },
            "Bird" => Species::Bird {
                can_fly: doc.can_fly.unwrap_or(true),
            },
            _ => return Err(PetcareError::UnknownSpecies(doc.kind)),
        };

        Ok(Pet {
            name: doc.name,
            age: doc.age,
            breed: doc.breed,
            species,
            care_schedule: doc.care_schedule,
            health_records: doc.health_records,
        })
    }

    /// Decodes one raw JSON record.
    pub fn from_value(value: serde_json::Value) -> Result<Pet> {
        Pet::from_document(PetDocument::from_value(value)?)
    }
}

impl PetDocument {
    pub fn from_value(value: serde_json::Value) -> Result<PetDocument> {
        serde_json::from_value(value).map_err(PetcareError::Serialization)
    }

    /// Describes a dog `size` that will be read as the default.
    pub fn size_warning(&self) -> Option<String> {
        if self.kind != "Dog" {
            return None;
        }
        let size = self.size.as_deref()?;
        match size.parse::<DogSize>() {
            Ok(_) => None,
            Err(_) => Some(format!(
                "{}: unknown size '{}', using {}",
                self.name,
                size,
                DogSize::default()
            )),
        }
    }
}
