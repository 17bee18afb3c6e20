use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use petcare::model::DogSize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "petcare", bin_name = "petcare", version)]
#[command(about = "Keep track of your pets' care tasks and health records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the pets data file (defaults to $PETCARE_HOME, then ./data)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new pet
    #[command(subcommand, alias = "n")]
    Add(AddCommands),

    /// Remove every pet with the given name
    #[command(alias = "rm")]
    Remove { name: String },

    /// List pets
    #[command(alias = "ls")]
    List,

    /// Show details for a pet
    #[command(alias = "v")]
    View {
        /// Pet number or name
        pet: String,
    },

    /// Show a pet's care tasks and recent health records
    #[command(alias = "t")]
    Tasks {
        /// Pet number or name
        pet: String,
    },

    /// Add or complete care tasks
    #[command(subcommand)]
    Task(TaskCommands),

    /// Add a health record to a pet
    Health {
        /// Pet number or name
        pet: String,

        /// Vaccination, Checkup, Treatment, Medication, Other...
        record_type: String,

        /// What happened
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Date of the event (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List overdue tasks across all pets
    #[command(alias = "o")]
    Overdue,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, recent-health-records)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddCommands {
    /// Add a dog
    Dog {
        name: String,
        age: u32,
        #[arg(long)]
        breed: Option<String>,
        /// Small, Medium or Large
        #[arg(long, default_value_t = DogSize::Medium)]
        size: DogSize,
    },

    /// Add a cat
    Cat {
        name: String,
        age: u32,
        #[arg(long)]
        breed: Option<String>,
        /// The cat goes outside
        #[arg(long)]
        outdoor: bool,
    },

    /// Add a bird
    Bird {
        name: String,
        age: u32,
        #[arg(long)]
        breed: Option<String>,
        /// The bird cannot fly
        #[arg(long)]
        cannot_fly: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a recurring care task to a pet
    Add {
        /// Pet number or name
        pet: String,
        task: String,
        /// Repeat every N days
        frequency_days: u32,
    },

    /// Mark a care task as done today
    Done {
        /// Pet number or name
        pet: String,
        /// Task number as shown by `petcare tasks`
        task_number: usize,
    },
}

/// Store warnings already reach the user as messages, so quiet runs only log errors.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "petcare=debug"
    } else {
        "error"
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_raises_log_level() {
        assert_eq!(default_filter(false), "error");
        assert_eq!(default_filter(true), "petcare=debug");
    }

    #[test]
    fn parses_add_dog_with_size() {
        let cli = Cli::try_parse_from(["petcare", "add", "dog", "Rex", "3", "--size", "large"]).unwrap();
        match cli.command {
            Some(Commands::Add(AddCommands::Dog { name, age, size, breed })) => {
                assert_eq!(name, "Rex");
                assert_eq!(age, 3);
                assert_eq!(size, DogSize::Large);
                assert_eq!(breed, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_age() {
        assert!(Cli::try_parse_from(["petcare", "add", "cat", "Tom", "old"]).is_err());
    }

    #[test]
    fn health_joins_description_words() {
        let cli = Cli::try_parse_from([
            "petcare", "health", "Rex", "Vaccination", "Rabies", "shot", "--date", "2024-02-03",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Health {
                description, date, ..
            }) => {
                assert_eq!(description, vec!["Rabies", "shot"]);
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["petcare", "overdue", "--today", "2024-05-09", "--data-dir", "x"]).unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 5, 9));
        assert_eq!(cli.data_dir, Some(PathBuf::from("x")));
    }
}
