use crate::commands::CmdResult;
use crate::error::{PetcareError, Result};
use crate::index::{DisplayPet, PetSelector};
use crate::pet_store::PetStore;
use crate::store::DataStore;

use super::helpers::resolve_pet;

pub fn run<S: DataStore>(store: &PetStore<S>, selector: &PetSelector) -> Result<CmdResult> {
    let index = resolve_pet(store, selector)?;
    let pet = store
        .get(index)
        .cloned()
        .ok_or_else(|| PetcareError::PetNotFound(selector.to_string()))?;

    Ok(CmdResult::default().with_listed_pets(vec![DisplayPet {
        index: index + 1,
        pet,
    }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_by_name() {
        let store = StoreFixture::new().with_dog("Rex").with_bird("Kiwi").store;
        let result = run(&store, &PetSelector::Name("Kiwi".into())).unwrap();
        assert_eq!(result.listed_pets.len(), 1);
        assert_eq!(result.listed_pets[0].index, 2);
        assert_eq!(result.listed_pets[0].pet.sound(), "Tweet! 🐦");
    }

    #[test]
    fn unknown_pet_fails() {
        let store = StoreFixture::new().with_dog("Rex").store;
        assert!(run(&store, &PetSelector::Index(3)).is_err());
    }
}
