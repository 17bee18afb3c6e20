use crate::commands::{CmdMessage, CmdResult, TaskLine};
use crate::error::{PetcareError, Result};
use crate::index::{DisplayPet, PetSelector};
use crate::pet_store::PetStore;
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::resolve_pet;

/// Appends a care task to the selected pet. Same-named tasks are kept side by side.
pub fn add<S: DataStore>(
    store: &mut PetStore<S>,
    selector: &PetSelector,
    task: String,
    frequency_days: u32,
    today: NaiveDate,
) -> Result<CmdResult> {
    let index = resolve_pet(store, selector)?;
    store.update(index, |pet| {
        pet.add_care_task(task.clone(), frequency_days, today);
        Ok(())
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task '{}' added successfully!",
        task
    )));
    Ok(result)
}

/// Marks the `task_number`-th (1-based) schedule entry as done on `date`.
pub fn done<S: DataStore>(
    store: &mut PetStore<S>,
    selector: &PetSelector,
    task_number: usize,
    date: NaiveDate,
) -> Result<CmdResult> {
    let index = resolve_pet(store, selector)?;
    let position = task_number
        .checked_sub(1)
        .ok_or_else(|| PetcareError::TaskNotFound {
            pet: selector.to_string(),
            index: task_number,
        })?;
    let (pet_name, task) = store.update(index, |pet| {
        let task = pet.mark_task_done(position, date)?.task.clone();
        Ok((pet.name.clone(), task))
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{}: {} marked as done",
        pet_name, task
    )));
    Ok(result)
}

/// The selected pet's schedule with due status, plus its `recent` latest health records.
pub fn list<S: DataStore>(
    store: &PetStore<S>,
    selector: &PetSelector,
    today: NaiveDate,
    recent: usize,
) -> Result<CmdResult> {
    let index = resolve_pet(store, selector)?;
    let pet = store.pets()[index].clone();

    let tasks = pet
        .care_schedule
        .iter()
        .enumerate()
        .map(|(i, entry)| TaskLine {
            number: i + 1,
            task: entry.clone(),
            days_since: entry.days_since(today),
            is_due: entry.is_due(today),
        })
        .collect();

    let skip = pet.health_records.len().saturating_sub(recent);
    let records = pet.health_records[skip..].to_vec();

    Ok(CmdResult::default()
        .with_listed_pets(vec![DisplayPet {
            index: index + 1,
            pet,
        }])
        .with_tasks(tasks)
        .with_health_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{fixture_date, StoreFixture};
    use chrono::Days;

    #[test]
    fn add_appends_task() {
        let mut store = StoreFixture::new().with_dog("Rex").store;
        add(
            &mut store,
            &PetSelector::Name("Rex".into()),
            "Brush teeth".into(),
            2,
            fixture_date(),
        )
        .unwrap();

        let pet = store.find_by_name("Rex").unwrap();
        assert_eq!(pet.care_schedule.len(), 5);
        assert_eq!(pet.care_schedule[4].task, "Brush teeth");
        assert_eq!(
            store.backend().records()[0]["care_schedule"][4]["frequency_days"],
            2
        );
    }

    #[test]
    fn done_updates_last_done() {
        let mut store = StoreFixture::new().with_dog("Rex").store;
        let later = fixture_date().checked_add_days(Days::new(10)).unwrap();

        let result = done(&mut store, &PetSelector::Index(1), 3, later).unwrap();

        assert_eq!(store.pets()[0].care_schedule[2].last_done, later);
        assert_eq!(result.messages[0].content, "Rex: Bath marked as done");
        assert_eq!(
            store.backend().records()[0]["care_schedule"][2]["last_done"],
            later.format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn done_with_bad_task_number() {
        let mut store = StoreFixture::new().with_dog("Rex").store;
        for number in [0, 9] {
            let err = done(&mut store, &PetSelector::Index(1), number, fixture_date()).unwrap_err();
            assert!(matches!(err, PetcareError::TaskNotFound { .. }));
        }
    }

    #[test]
    fn list_reports_due_status() {
        let store = StoreFixture::new().with_cat("Tom").store;
        let today = fixture_date().checked_add_days(Days::new(2)).unwrap();

        let result = list(&store, &PetSelector::Index(1), today, 3).unwrap();
        let status: Vec<_> = result
            .tasks
            .iter()
            .map(|t| (t.number, t.days_since, t.is_due))
            .collect();
        assert_eq!(
            status,
            vec![(1, 2, true), (2, 2, true), (3, 2, false), (4, 2, false)]
        );
    }

    #[test]
    fn list_shows_only_recent_health_records() {
        let mut store = StoreFixture::new().with_dog("Rex").store;
        store
            .update(0, |pet| {
                for i in 1..=5 {
                    pet.add_health_record("Checkup", format!("Visit {}", i), fixture_date());
                }
                Ok(())
            })
            .unwrap();

        let result = list(&store, &PetSelector::Index(1), fixture_date(), 3).unwrap();
        let descriptions: Vec<_> = result
            .health_records
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Visit 3", "Visit 4", "Visit 5"]);
    }
}
