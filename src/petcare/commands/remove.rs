use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::pet_store::PetStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut PetStore<S>, name: &str) -> Result<CmdResult> {
    let removed = store.remove(name);
    let mut result = CmdResult::default();

    match removed {
        0 => result.add_message(CmdMessage::info(format!("No pet named {}", name))),
        1 => result.add_message(CmdMessage::success(format!("{} has been removed", name))),
        n => result.add_message(CmdMessage::success(format!(
            "{} pets named {} have been removed",
            n, name
        ))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_named_pet() {
        let mut store = StoreFixture::new().with_dog("Rex").with_cat("Tom").store;
        let result = run(&mut store, "Rex").unwrap();

        assert!(store.find_by_name("Rex").is_none());
        assert_eq!(store.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn unknown_name_is_not_an_error() {
        let mut store = StoreFixture::new().with_dog("Rex").store;
        let result = run(&mut store, "Ghost").unwrap();

        assert_eq!(store.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
    }

    #[test]
    fn reports_multiple_removals() {
        let mut store = StoreFixture::new().with_dog("Rex").with_cat("Rex").store;
        let result = run(&mut store, "Rex").unwrap();
        assert!(store.is_empty());
        assert!(result.messages[0].content.starts_with("2 pets"));
    }
}
