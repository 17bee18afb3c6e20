use crate::config::PetcareConfig;
use crate::index::DisplayPet;
use crate::model::{CareTask, HealthRecord, PetOverdue};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod health;
pub mod helpers;
pub mod list;
pub mod overdue;
pub mod remove;
pub mod tasks;
pub mod view;

#[derive(Debug, Clone)]
pub struct PetcarePaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One care-schedule entry as shown in a pet's task list.
#[derive(Debug, Clone)]
pub struct TaskLine {
    /// 1-based position in the schedule
    pub number: usize,
    pub task: CareTask,
    pub days_since: i64,
    pub is_due: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_pets: Vec<DisplayPet>,
    pub tasks: Vec<TaskLine>,
    pub health_records: Vec<HealthRecord>,
    pub overdue: Vec<PetOverdue>,
    pub config: Option<PetcareConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_pets(mut self, pets: Vec<DisplayPet>) -> Self {
        self.listed_pets = pets;
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<TaskLine>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_health_records(mut self, records: Vec<HealthRecord>) -> Self {
        self.health_records = records;
        self
    }

    pub fn with_overdue(mut self, overdue: Vec<PetOverdue>) -> Self {
        self.overdue = overdue;
        self
    }

    pub fn with_config(mut self, config: PetcareConfig) -> Self {
        self.config = Some(config);
        self
    }
}
