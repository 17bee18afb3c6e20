use crate::error::{PetcareError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BREED: &str = "Unknown";

/// A recurring care task: done every `frequency_days`, last done on `last_done`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareTask {
    pub task: String,
    pub frequency_days: u32,
    pub last_done: NaiveDate,
}

impl CareTask {
    pub fn new(task: impl Into<String>, frequency_days: u32, last_done: NaiveDate) -> Self {
        Self {
            task: task.into(),
            frequency_days,
            last_done,
        }
    }

    /// Whole days between `last_done` and `reference`. Negative when `last_done`
    /// lies after the reference date.
    pub fn days_since(&self, reference: NaiveDate) -> i64 {
        reference.signed_duration_since(self.last_done).num_days()
    }

    pub fn is_due(&self, reference: NaiveDate) -> bool {
        self.days_since(reference) >= i64::from(self.frequency_days)
    }

    /// 1 on the first day the task is due, growing by one per day after that.
    pub fn days_overdue(&self, reference: NaiveDate) -> Option<i64> {
        let days_since = self.days_since(reference);
        let frequency = i64::from(self.frequency_days);
        (days_since >= frequency).then(|| days_since - frequency + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub description: String,
    pub date: NaiveDate,
}

impl HealthRecord {
    pub fn new(record_type: impl Into<String>, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            record_type: record_type.into(),
            description: description.into(),
            date,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DogSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl fmt::Display for DogSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DogSize::Small => "Small",
            DogSize::Medium => "Medium",
            DogSize::Large => "Large",
        };
        f.write_str(label)
    }
}

impl FromStr for DogSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(DogSize::Small),
            "medium" => Ok(DogSize::Medium),
            "large" => Ok(DogSize::Large),
            _ => Err(format!("Invalid dog size: {} (expected Small, Medium or Large)", s)),
        }
    }
}

/// The closed set of pet kinds, each carrying its one kind-specific attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dog { size: DogSize },
    Cat { indoor: bool },
    Bird { can_fly: bool },
}

impl Species {
    pub fn dog() -> Self {
        Species::Dog {
            size: DogSize::default(),
        }
    }

    pub fn cat() -> Self {
        Species::Cat { indoor: true }
    }

    pub fn bird() -> Self {
        Species::Bird { can_fly: true }
    }

    /// The tag written to the `type` field of a persisted record.
    pub fn kind(&self) -> &'static str {
        match self {
            Species::Dog { .. } => "Dog",
            Species::Cat { .. } => "Cat",
            Species::Bird { .. } => "Bird",
        }
    }

    pub fn sound(&self) -> &'static str {
        match self {
            Species::Dog { .. } => "Woof! 🐕",
            Species::Cat { .. } => "Meow! 🐱",
            Species::Bird { .. } => "Tweet! 🐦",
        }
    }

    pub fn care_requirements(&self) -> String {
        match self {
            Species::Dog { size } => format!(
                "Dogs need daily walks, feeding, weekly baths, and regular vet checkups. Size: {}",
                size
            ),
            Species::Cat { indoor } => format!(
                "Cats need daily feeding, litter maintenance, brushing, and vet checkups. Type: {}",
                if *indoor { "Indoor" } else { "Outdoor" }
            ),
            Species::Bird { can_fly } => format!(
                "Birds need daily feeding, cage cleaning, wing care, and vet checkups. Status: {}",
                if *can_fly { "Can fly" } else { "Cannot fly" }
            ),
        }
    }

    /// Tasks every new pet of this kind starts with, as `(task, frequency_days)`.
    pub fn default_care_tasks(&self) -> &'static [(&'static str, u32)] {
        match self {
            Species::Dog { .. } => &[("Walk", 1), ("Feed", 1), ("Bath", 7), ("Vet Checkup", 90)],
            Species::Cat { .. } => &[
                ("Feed", 1),
                ("Litter Box Clean", 2),
                ("Brush", 3),
                ("Vet Checkup", 90),
            ],
            Species::Bird { .. } => &[
                ("Feed", 1),
                ("Cage Clean", 3),
                ("Wing Trim", 60),
                ("Vet Checkup", 180),
            ],
        }
    }
}

/// A care task that is due, as reported by [`Pet::overdue_tasks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueTask {
    pub task: String,
    pub days_overdue: i64,
}

/// An overdue task tagged with the pet it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetOverdue {
    pub pet_name: String,
    pub task: String,
    pub days_overdue: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub name: String,
    pub age: u32,
    pub breed: String,
    pub species: Species,
    pub care_schedule: Vec<CareTask>,
    pub health_records: Vec<HealthRecord>,
}

impl Pet {
    /// Creates a pet seeded with its kind's default care tasks, all last done on `today`.
    pub fn new(species: Species, name: impl Into<String>, age: u32, today: NaiveDate) -> Self {
        let care_schedule = species
            .default_care_tasks()
            .iter()
            .map(|(task, frequency)| CareTask::new(*task, *frequency, today))
            .collect();

        Self {
            name: name.into(),
            age,
            breed: DEFAULT_BREED.to_string(),
            species,
            care_schedule,
            health_records: Vec::new(),
        }
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn kind(&self) -> &'static str {
        self.species.kind()
    }

    pub fn sound(&self) -> &'static str {
        self.species.sound()
    }

    pub fn care_requirements(&self) -> String {
        self.species.care_requirements()
    }

    pub fn add_care_task(&mut self, task: impl Into<String>, frequency_days: u32, last_done: NaiveDate) {
        self.care_schedule
            .push(CareTask::new(task, frequency_days, last_done));
    }

    pub fn add_health_record(
        &mut self,
        record_type: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) {
        self.health_records
            .push(HealthRecord::new(record_type, description, date));
    }

    /// Tasks due on `reference`, in schedule order.
    pub fn overdue_tasks(&self, reference: NaiveDate) -> Vec<OverdueTask> {
        self.care_schedule
            .iter()
            .filter_map(|entry| {
                entry.days_overdue(reference).map(|days_overdue| OverdueTask {
                    task: entry.task.clone(),
                    days_overdue,
                })
            })
            .collect()
    }

    /// Sets `last_done` of the schedule entry at `index` (0-based).
    pub fn mark_task_done(&mut self, index: usize, date: NaiveDate) -> Result<&CareTask> {
        let entry = self
            .care_schedule
            .get_mut(index)
            .ok_or_else(|| PetcareError::TaskNotFound {
                pet: self.name.clone(),
                index: index + 1,
            })?;
        entry.last_done = date;
        Ok(entry)
    }
}
