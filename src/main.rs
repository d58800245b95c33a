use chrono::{Local, NaiveDateTime};
use clap::Parser;
use habitsched::application::{Edit, HabitScheduleForm};
use habitsched::cli::{
    format_reminder_list, format_schedule, format_validation_errors, Cli, Commands,
};
use habitsched::error::{Result, ScheduleError};
use habitsched::infrastructure::{Config, JsonFileStore, ScheduleStore};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by HABITSCHED_LOG (default: warn)
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("HABITSCHED_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New { file, force } => {
            let store = JsonFileStore::new(file);
            if store.exists() && !force {
                return Err(ScheduleError::ScheduleExists(store.path));
            }

            let config = Config::discover(cli.config.as_deref())?;
            let schedule = HabitScheduleForm::from_config(&config)
                .submit()
                .map_err(ScheduleError::Validation)?;
            store.save(&schedule)?;

            println!("Created {}", store.location().display());
            print!("{}", format_schedule(&schedule));
            Ok(())
        }
        Commands::Show { file } => {
            let schedule = JsonFileStore::new(file).load()?;
            print!("{}", format_schedule(&schedule));
            if let Err(errors) = schedule.validate() {
                println!("Problems:");
                print!("{}", format_validation_errors(&errors));
            }
            Ok(())
        }
        Commands::Edit { file, edits } => {
            let store = JsonFileStore::new(file);
            let mut form = HabitScheduleForm::from_schedule(store.load()?);

            // Parse everything first so a typo leaves the file untouched
            let edits = edits
                .iter()
                .map(|raw| raw.parse::<Edit>())
                .collect::<Result<Vec<_>>>()?;
            for edit in edits {
                edit.apply(&mut form)?;
            }

            let schedule = form.submit().map_err(ScheduleError::Validation)?;
            store.save(&schedule)?;
            print!("{}", format_schedule(&schedule));
            Ok(())
        }
        Commands::Validate { file } => {
            let schedule = JsonFileStore::new(file).load()?;
            schedule.validate().map_err(ScheduleError::Validation)?;
            println!("Schedule is valid");
            Ok(())
        }
        Commands::Next { file, after, count } => {
            let schedule = JsonFileStore::new(file).load()?;
            let after = match after {
                Some(raw) => NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M").map_err(|_| {
                    ScheduleError::InvalidEdit(format!(
                        "Invalid --after value '{}'. Expected YYYY-MM-DD HH:MM",
                        raw
                    ))
                })?,
                None => Local::now().naive_local(),
            };

            let reminders: Vec<NaiveDateTime> =
                schedule.upcoming_reminders(after).take(count).collect();
            println!("{}", format_reminder_list(&reminders).trim_end());
            Ok(())
        }
        Commands::Config { write } => {
            let config = Config::discover(cli.config.as_deref())?;
            println!("default_reminder_time = {}", config.default_reminder_time);
            println!(
                "default_reminder_enabled = {}",
                config.default_reminder_enabled
            );
            if let Some(path) = write {
                config.save_to_path(&path)?;
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}
