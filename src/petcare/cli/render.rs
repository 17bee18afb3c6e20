use colored::Colorize;
use petcare::api::{CmdMessage, MessageLevel, TaskLine};
use petcare::config::PetcareConfig;
use petcare::index::DisplayPet;
use petcare::model::{HealthRecord, Pet, PetOverdue};
use std::fmt::Write;
use std::time::Duration;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
const NO_OVERDUE: &str = "No overdue tasks! Great job taking care of your pets! 🎉";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_pet_list(pets: &[DisplayPet]) -> String {
    if pets.is_empty() {
        return "No pets yet. Add one with `petcare add`.\n".to_string();
    }

    let name_width = pets.iter().map(|dp| dp.pet.name.width()).max().unwrap_or(0);
    let idx_width = pets.len().to_string().len();

    let mut out = String::new();
    for dp in pets {
        let pad = name_width.saturating_sub(dp.pet.name.width());
        let _ = writeln!(
            out,
            "  {:>w$}. {}{}  {:<4}  {}",
            dp.index.to_string().yellow(),
            dp.pet.name.bold(),
            " ".repeat(pad),
            dp.pet.kind(),
            dp.pet.sound().dimmed(),
            w = idx_width
        );
    }
    out
}

pub(super) fn render_pet_details(pet: &Pet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "Name:".bold(), pet.name);
    let _ = writeln!(out, "{} {}", "Type:".bold(), pet.kind());
    let _ = writeln!(out, "{} {}", "Age:".bold(), pet.age);
    let _ = writeln!(out, "{} {}", "Breed:".bold(), pet.breed);
    let _ = writeln!(out, "{} {}", "Sound:".bold(), pet.sound());
    let _ = writeln!(out, "{} {}", "Care Requirements:".bold(), pet.care_requirements());
    out
}

pub(super) fn render_tasks(pet: &Pet, tasks: &[TaskLine], records: &[HealthRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Care Tasks for {}:", pet.name.bold());
    let _ = writeln!(out, "Care Requirements: {}", pet.care_requirements());
    let _ = writeln!(out);

    if tasks.is_empty() {
        let _ = writeln!(out, "{}", "No care tasks.".dimmed());
    }

    for line in tasks {
        let status = if line.is_due {
            "❌ Overdue".red()
        } else {
            "✅ Done".green()
        };
        let _ = writeln!(
            out,
            "{}. {} (every {} days) - {}",
            line.number, line.task.task, line.task.frequency_days, status
        );
        let _ = writeln!(
            out,
            "   Last done: {} ({})",
            line.task.last_done.format("%Y-%m-%d"),
            format_days_ago(line.days_since).dimmed()
        );
    }

    if !records.is_empty() {
        let _ = writeln!(out, "\n--- Health Records ---");
        for record in records {
            let _ = writeln!(
                out,
                "📋 {}: {} - {}",
                record.date.format("%Y-%m-%d"),
                record.record_type,
                record.description
            );
        }
    }
    out
}

pub(super) fn render_overdue(overdue: &[PetOverdue]) -> String {
    if overdue.is_empty() {
        return format!("{}\n", NO_OVERDUE.green());
    }

    let mut out = String::new();
    for item in overdue {
        let _ = writeln!(
            out,
            "🚨 {}: {} (overdue by {} {})",
            item.pet_name.bold(),
            item.task,
            item.days_overdue,
            if item.days_overdue == 1 { "day" } else { "days" }
        );
    }
    out
}

pub(super) fn render_config(config: &PetcareConfig) -> String {
    let mut out = String::new();
    for key in PetcareConfig::KEYS {
        if let Some(value) = config.get(key) {
            let _ = writeln!(out, "{} = {}", key, value);
        }
    }
    out
}

fn format_days_ago(days: i64) -> String {
    match days {
        d if d < 0 => "scheduled in the future".to_string(),
        0 => "today".to_string(),
        d => Formatter::new().convert(Duration::from_secs(d as u64 * SECONDS_PER_DAY)),
    }
}
