use crate::model::Pet;
use std::fmt;
use std::str::FromStr;

/// A user input to select a pet, either by its 1-based list position or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetSelector {
    Index(usize),
    Name(String),
}

impl fmt::Display for PetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetSelector::Index(idx) => write!(f, "{}", idx),
            PetSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for PetSelector {
    type Err = String;

    /// Positive integers select by position, anything else is taken as a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Pet selector cannot be empty".to_string());
        }
        match trimmed.parse::<usize>() {
            Ok(0) => Err("Pet numbers start at 1".to_string()),
            Ok(n) => Ok(PetSelector::Index(n)),
            Err(_) => Ok(PetSelector::Name(trimmed.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayPet {
    pub index: usize,
    pub pet: Pet,
}

/// Pairs each pet with its 1-based list position, keeping collection order.
pub fn index_pets(pets: &[Pet]) -> Vec<DisplayPet> {
    pets.iter()
        .enumerate()
        .map(|(i, pet)| DisplayPet {
            index: i + 1,
            pet: pet.clone(),
        })
        .collect()
}
