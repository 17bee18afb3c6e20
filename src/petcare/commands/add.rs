use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayPet;
use crate::model::{Pet, Species, DEFAULT_BREED};
use crate::pet_store::PetStore;
use crate::store::DataStore;
use chrono::NaiveDate;

pub fn run<S: DataStore>(
    store: &mut PetStore<S>,
    species: Species,
    name: String,
    age: u32,
    breed: Option<String>,
    today: NaiveDate,
) -> Result<CmdResult> {
    let breed = breed
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_BREED.to_string());
    let pet = Pet::new(species, name, age, today).with_breed(breed);

    store.add(pet.clone());

    let mut result = CmdResult::default().with_listed_pets(vec![DisplayPet {
        index: store.len(),
        pet: pet.clone(),
    }]);
    result.add_message(CmdMessage::success(format!(
        "{} has been added to your pets!",
        pet.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DogSize;
    use crate::store::memory::fixtures::fixture_date;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_pet_with_default_breed() {
        let mut store = PetStore::open(InMemoryStore::new());
        let result = run(
            &mut store,
            Species::dog(),
            "Rex".into(),
            3,
            None,
            fixture_date(),
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.pets()[0].breed, "Unknown");
        assert_eq!(result.listed_pets[0].index, 1);
        assert_eq!(store.backend().records()[0]["size"], "Medium");
    }

    #[test]
    fn blank_breed_falls_back_to_default() {
        let mut store = PetStore::open(InMemoryStore::new());
        run(
            &mut store,
            Species::Dog {
                size: DogSize::Small,
            },
            "Rex".into(),
            3,
            Some("  ".into()),
            fixture_date(),
        )
        .unwrap();
        assert_eq!(store.pets()[0].breed, "Unknown");
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut store = PetStore::open(InMemoryStore::new());
        for _ in 0..2 {
            run(&mut store, Species::cat(), "Tom".into(), 2, Some("Tabby".into()), fixture_date())
                .unwrap();
        }
        assert_eq!(store.len(), 2);
        assert_eq!(store.pets()[1].breed, "Tabby");
    }
}
