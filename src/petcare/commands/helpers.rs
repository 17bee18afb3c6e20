use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PetcareError, Result};
use crate::index::PetSelector;
use crate::pet_store::PetStore;
use crate::store::DataStore;

/// Resolves a selector to a 0-based position in the store. A pet whose name is
/// exactly the number typed wins over the pet at that position.
pub fn resolve_pet<S: DataStore>(store: &PetStore<S>, selector: &PetSelector) -> Result<usize> {
    match selector {
        PetSelector::Index(n) => {
            if let Some(position) = store.position_by_name(&n.to_string()) {
                Ok(position)
            } else if *n >= 1 && *n <= store.len() {
                Ok(n - 1)
            } else {
                Err(PetcareError::Api(format!(
                    "Pet {} not found ({} pets)",
                    n,
                    store.len()
                )))
            }
        }
        PetSelector::Name(name) => store
            .position_by_name(name)
            .ok_or_else(|| PetcareError::PetNotFound(name.clone())),
    }
}

/// Moves any pending load/save diagnostics from the store onto the result.
pub fn drain_warnings<S: DataStore>(store: &mut PetStore<S>, result: &mut CmdResult) {
    for warning in store.take_warnings() {
        result.add_message(CmdMessage::warning(warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_index_and_name() {
        let store = StoreFixture::new().with_dog("Rex").with_cat("Tom").store;
        assert_eq!(resolve_pet(&store, &PetSelector::Index(2)).unwrap(), 1);
        assert_eq!(resolve_pet(&store, &PetSelector::Name("Rex".into())).unwrap(), 0);
    }

    #[test]
    fn numeric_names_are_selectable() {
        let store = StoreFixture::new().with_dog("7").store;
        assert_eq!(resolve_pet(&store, &PetSelector::Index(7)).unwrap(), 0);

        let store = StoreFixture::new().with_dog("Rex").with_cat("1").store;
        assert_eq!(resolve_pet(&store, &PetSelector::Index(1)).unwrap(), 1);
        assert_eq!(resolve_pet(&store, &PetSelector::Index(2)).unwrap(), 1);
    }

    #[test]
    fn out_of_range_and_unknown_fail() {
        let store = StoreFixture::new().with_dog("Rex").store;
        assert!(resolve_pet(&store, &PetSelector::Index(2)).is_err());
        assert!(matches!(
            resolve_pet(&store, &PetSelector::Name("Tom".into())),
            Err(PetcareError::PetNotFound(_))
        ));
    }
}
