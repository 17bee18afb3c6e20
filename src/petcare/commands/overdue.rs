use crate::commands::CmdResult;
use crate::error::Result;
use crate::pet_store::PetStore;
use crate::store::DataStore;
use chrono::NaiveDate;

pub fn run<S: DataStore>(store: &PetStore<S>, today: NaiveDate) -> Result<CmdResult> {
    Ok(CmdResult::default().with_overdue(store.all_overdue(today)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{fixture_date, StoreFixture};
    use chrono::Days;

    #[test]
    fn collects_overdue_across_pets() {
        let store = StoreFixture::new().with_dog("Rex").with_bird("Kiwi").store;
        let today = fixture_date().checked_add_days(Days::new(3)).unwrap();

        let result = run(&store, today).unwrap();
        let tasks: Vec<_> = result
            .overdue
            .iter()
            .map(|o| format!("{}:{}:{}", o.pet_name, o.task, o.days_overdue))
            .collect();
        assert_eq!(
            tasks,
            vec!["Rex:Walk:3", "Rex:Feed:3", "Kiwi:Feed:3", "Kiwi:Cage Clean:1"]
        );
    }

    #[test]
    fn nothing_overdue_on_creation_day() {
        let store = StoreFixture::new().with_dog("Rex").store;
        assert!(run(&store, fixture_date()).unwrap().overdue.is_empty());
    }
}
