use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::PetSelector;
use crate::pet_store::PetStore;
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::resolve_pet;

pub fn add<S: DataStore>(
    store: &mut PetStore<S>,
    selector: &PetSelector,
    record_type: String,
    description: String,
    date: NaiveDate,
) -> Result<CmdResult> {
    let index = resolve_pet(store, selector)?;
    let pet_name = store.update(index, |pet| {
        pet.add_health_record(record_type, description, date);
        Ok(pet.name.clone())
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Health record added for {}",
        pet_name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{fixture_date, StoreFixture};

    #[test]
    fn appends_record_with_given_date() {
        let mut store = StoreFixture::new().with_dog("Rex").store;
        let before = store.pets()[0].health_records.len();

        add(
            &mut store,
            &PetSelector::Name("Rex".into()),
            "Vaccination".into(),
            "Rabies shot".into(),
            fixture_date(),
        )
        .unwrap();

        let records = &store.pets()[0].health_records;
        assert_eq!(records.len(), before + 1);
        assert_eq!(records[0].record_type, "Vaccination");
        assert_eq!(records[0].date, fixture_date());
        assert_eq!(
            store.backend().records()[0]["health_records"][0]["type"],
            "Vaccination"
        );
    }
}
