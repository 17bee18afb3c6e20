use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_pets;
use crate::pet_store::PetStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &PetStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_pets(index_pets(store.pets())))
}
