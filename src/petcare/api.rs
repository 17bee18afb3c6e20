//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI talks to
//! petcare through [`PetCareApi`].
//!
//! The facade:
//! - **Parses selectors** (`"2"` or `"Rex"`) into [`PetSelector`]s
//! - **Supplies today's date** to commands, which never read the clock themselves
//! - **Surfaces storage diagnostics** by moving the store's pending warnings
//!   onto each [`CmdResult`]
//!
//! Business logic lives in `commands/*.rs`; output formatting lives in the UI.
//!
//! `PetCareApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PetCareApi<FileStore>`
//! - Testing: `PetCareApi<InMemoryStore>`

use crate::commands::{self, helpers::drain_warnings};
use crate::error::{PetcareError, Result};
use crate::index::PetSelector;
use crate::model::Species;
use crate::pet_store::PetStore;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

pub struct PetCareApi<S: DataStore> {
    store: PetStore<S>,
    paths: commands::PetcarePaths,
    today: Option<NaiveDate>,
}

impl<S: DataStore> PetCareApi<S> {
    pub fn new(backend: S, paths: commands::PetcarePaths) -> Self {
        Self {
            store: PetStore::open(backend),
            paths,
            today: None,
        }
    }

    /// Pins "today" to a fixed date instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn add_pet(
        &mut self,
        species: Species,
        name: String,
        age: u32,
        breed: Option<String>,
    ) -> Result<commands::CmdResult> {
        let today = self.today();
        let result = commands::add::run(&mut self.store, species, name, age, breed, today)?;
        Ok(self.finish(result))
    }

    pub fn remove_pet(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::remove::run(&mut self.store, name)?;
        Ok(self.finish(result))
    }

    pub fn list_pets(&mut self) -> Result<commands::CmdResult> {
        let result = commands::list::run(&self.store)?;
        Ok(self.finish(result))
    }

    pub fn view_pet(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        let result = commands::view::run(&self.store, &selector)?;
        Ok(self.finish(result))
    }

    pub fn pet_tasks(&mut self, selector: &str, recent_records: usize) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        let result = commands::tasks::list(&self.store, &selector, self.today(), recent_records)?;
        Ok(self.finish(result))
    }

    pub fn add_task(
        &mut self,
        selector: &str,
        task: String,
        frequency_days: u32,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        let today = self.today();
        let result = commands::tasks::add(&mut self.store, &selector, task, frequency_days, today)?;
        Ok(self.finish(result))
    }

    pub fn mark_task_done(&mut self, selector: &str, task_number: usize) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        let today = self.today();
        let result = commands::tasks::done(&mut self.store, &selector, task_number, today)?;
        Ok(self.finish(result))
    }

    /// Records a health event, dated today unless `date` is given.
    pub fn add_health_record(
        &mut self,
        selector: &str,
        record_type: String,
        description: String,
        date: Option<NaiveDate>,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        let date = date.unwrap_or_else(|| self.today());
        let result =
            commands::health::add(&mut self.store, &selector, record_type, description, date)?;
        Ok(self.finish(result))
    }

    pub fn overdue(&mut self) -> Result<commands::CmdResult> {
        let result = commands::overdue::run(&self.store, self.today())?;
        Ok(self.finish(result))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &PetStore<S> {
        &self.store
    }

    pub fn paths(&self) -> &commands::PetcarePaths {
        &self.paths
    }

    fn finish(&mut self, mut result: commands::CmdResult) -> commands::CmdResult {
        drain_warnings(&mut self.store, &mut result);
        result
    }
}

fn parse_selector(input: &str) -> Result<PetSelector> {
    input.parse().map_err(PetcareError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PetcarePaths, TaskLine};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;
    use std::path::PathBuf;

    fn api(backend: InMemoryStore) -> PetCareApi<InMemoryStore> {
        let paths = PetcarePaths {
            data_dir: PathBuf::from("unused"),
        };
        PetCareApi::new(backend, paths).with_today(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn add_pet_uses_pinned_today() {
        let mut api = api(InMemoryStore::new());
        api.add_pet(Species::dog(), "Rex".into(), 3, None).unwrap();
        assert_eq!(
            api.store().backend().records()[0]["care_schedule"][0]["last_done"],
            "2024-05-01"
        );
    }

    #[test]
    fn health_record_defaults_to_today() {
        let mut api = api(InMemoryStore::new());
        api.add_pet(Species::cat(), "Tom".into(), 2, None).unwrap();
        api.add_health_record("Tom", "Vaccination".into(), "Rabies shot".into(), None)
            .unwrap();

        let pet = api.store().find_by_name("Tom").unwrap();
        assert_eq!(pet.health_records.len(), 1);
        assert_eq!(pet.health_records[0].date, api.today());
    }

    #[test]
    fn selectors_accept_index_or_name() {
        let mut api = api(InMemoryStore::new());
        api.add_pet(Species::dog(), "Rex".into(), 3, None).unwrap();
        api.add_pet(Species::bird(), "Kiwi".into(), 1, None).unwrap();

        assert_eq!(api.view_pet("2").unwrap().listed_pets[0].pet.name, "Kiwi");
        assert_eq!(api.view_pet("Rex").unwrap().listed_pets[0].index, 1);
        assert!(matches!(api.view_pet("0"), Err(PetcareError::Api(_))));
    }

    #[test]
    fn load_warnings_surface_once() {
        let backend = InMemoryStore::with_records(vec![json!({"type": "Fish"})]);
        let mut api = api(backend);

        let first = api.list_pets().unwrap();
        assert!(first.listed_pets.is_empty());
        assert!(matches!(first.messages[0].level, MessageLevel::Warning));

        let second = api.list_pets().unwrap();
        assert!(second.messages.is_empty());
    }

    #[test]
    fn failed_save_is_a_warning_not_an_error() {
        let mut api = api(InMemoryStore::new().rejecting_writes());
        let result = api.add_pet(Species::dog(), "Rex".into(), 3, None).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)));
        assert_eq!(api.store().len(), 1);
    }
}
