use super::render::{
    print_messages, render_config, render_overdue, render_pet_details, render_pet_list,
    render_tasks,
};
use super::setup::{init_tracing, AddCommands, Cli, Commands, TaskCommands};
use clap::Parser;
use petcare::api::{ConfigAction, PetCareApi};
use petcare::error::{PetcareError, Result};
use petcare::init::initialize;
use petcare::model::Species;
use petcare::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: PetCareApi<FileStore>,
    recent_health_records: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Add(cmd)) => handle_add(&mut ctx, cmd),
        Some(Commands::Remove { name }) => handle_remove(&mut ctx, name),
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::View { pet }) => handle_view(&mut ctx, pet),
        Some(Commands::Tasks { pet }) => handle_tasks(&mut ctx, pet),
        Some(Commands::Task(cmd)) => match cmd {
            TaskCommands::Add {
                pet,
                task,
                frequency_days,
            } => handle_task_add(&mut ctx, pet, task, frequency_days),
            TaskCommands::Done { pet, task_number } => {
                handle_task_done(&mut ctx, pet, task_number)
            }
        },
        Some(Commands::Health {
            pet,
            record_type,
            description,
            date,
        }) => handle_health(&mut ctx, pet, record_type, description, date),
        Some(Commands::Overdue) => handle_overdue(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.data_dir.clone());

    let api = match cli.today {
        Some(today) => ctx.api.with_today(today),
        None => ctx.api,
    };
    debug!(data_dir = %api.paths().data_dir.display(), today = %api.today(), "context ready");

    AppContext {
        api,
        recent_health_records: ctx.config.recent_health_records,
    }
}

fn non_empty(value: String, what: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PetcareError::Api(format!("Please enter a {}", what)));
    }
    Ok(trimmed.to_string())
}

fn handle_add(ctx: &mut AppContext, cmd: AddCommands) -> Result<()> {
    let (species, name, age, breed) = match cmd {
        AddCommands::Dog {
            name,
            age,
            breed,
            size,
        } => (Species::Dog { size }, name, age, breed),
        AddCommands::Cat {
            name,
            age,
            breed,
            outdoor,
        } => (Species::Cat { indoor: !outdoor }, name, age, breed),
        AddCommands::Bird {
            name,
            age,
            breed,
            cannot_fly,
        } => (
            Species::Bird {
                can_fly: !cannot_fly,
            },
            name,
            age,
            breed,
        ),
    };
    let name = non_empty(name, "name")?;

    let result = ctx.api.add_pet(species, name, age, breed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, name: String) -> Result<()> {
    let name = non_empty(name, "name")?;
    let result = ctx.api.remove_pet(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_pets()?;
    print!("{}", render_pet_list(&result.listed_pets));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, pet: String) -> Result<()> {
    let result = ctx.api.view_pet(&pet)?;
    for dp in &result.listed_pets {
        print!("{}", render_pet_details(&dp.pet));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_tasks(ctx: &mut AppContext, pet: String) -> Result<()> {
    let result = ctx.api.pet_tasks(&pet, ctx.recent_health_records)?;
    if let Some(dp) = result.listed_pets.first() {
        print!(
            "{}",
            render_tasks(&dp.pet, &result.tasks, &result.health_records)
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_task_add(
    ctx: &mut AppContext,
    pet: String,
    task: String,
    frequency_days: u32,
) -> Result<()> {
    let task = non_empty(task, "task name")?;
    if frequency_days == 0 {
        return Err(PetcareError::Api(
            "Please enter a valid frequency (at least 1 day)".into(),
        ));
    }
    let result = ctx.api.add_task(&pet, task, frequency_days)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_task_done(ctx: &mut AppContext, pet: String, task_number: usize) -> Result<()> {
    let result = ctx.api.mark_task_done(&pet, task_number)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_health(
    ctx: &mut AppContext,
    pet: String,
    record_type: String,
    description: Vec<String>,
    date: Option<chrono::NaiveDate>,
) -> Result<()> {
    let record_type = non_empty(record_type, "record type")?;
    let description = non_empty(description.join(" "), "description")?;
    let result = ctx
        .api
        .add_health_record(&pet, record_type, description, date)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_overdue(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.overdue()?;
    print!("{}", render_overdue(&result.overdue));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
