//! ChronoDesk - command-line client for the ChronoDesk time-tracking API
//!
//! Every command prints its payload as pretty JSON on stdout. Logs go to
//! stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use chronodesk_domain::{
    CalendarEventType, CalendarQuery, ClockInRequest, CompanySettingsUpdate, TimeEntryFilter,
    TimeEntryStatus,
};
use chronodesk_infra::config;
use chronodesk_lib::utils::logging::init_tracing;
use chronodesk_lib::{commands, AppContext};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "chronodesk")]
#[command(version)]
#[command(about = "ChronoDesk time-tracking client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Explicit config file (JSON or TOML); otherwise standard locations are probed
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "CHRONODESK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// End the session
    Logout,

    /// Show dashboard aggregates
    Dashboard {
        /// Scope to one company (admins only)
        #[arg(long = "company", value_name = "ID")]
        company_id: Option<i64>,
    },

    /// Read or change company settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// List notifications
    Notifications {
        /// Only unread notifications
        #[arg(long)]
        unread: bool,
    },

    /// List calendar events in a date window (inclusive)
    Calendar {
        #[arg(long, value_name = "YYYY-MM-DD")]
        start: NaiveDate,

        #[arg(long, value_name = "YYYY-MM-DD")]
        end: NaiveDate,

        #[arg(long = "user", value_name = "ID")]
        user_id: Option<i64>,

        /// Event type filter; repeat for several
        #[arg(long = "type", value_name = "TYPE", value_parser = parse_snake_case::<CalendarEventType>)]
        types: Vec<CalendarEventType>,
    },

    /// List or record time entries
    Entries {
        #[command(subcommand)]
        command: Option<EntryCommands>,

        #[arg(long = "user", value_name = "ID")]
        user_id: Option<i64>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<NaiveDate>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<NaiveDate>,

        #[arg(long, value_parser = parse_snake_case::<TimeEntryStatus>)]
        status: Option<TimeEntryStatus>,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show settings for a company
    Get {
        #[arg(long = "company", value_name = "ID")]
        company_id: i64,
    },

    /// Change selected settings; omitted flags are left untouched
    Update {
        #[arg(long = "company", value_name = "ID")]
        company_id: i64,

        #[arg(long)]
        timezone: Option<String>,

        #[arg(long)]
        locale: Option<String>,

        /// 0 = Sunday .. 6 = Saturday
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
        week_starts_on: Option<u8>,

        #[arg(long)]
        daily_hours_target: Option<f64>,
    },
}

#[derive(Subcommand)]
enum EntryCommands {
    /// Start a running entry
    ClockIn {
        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "shift", value_name = "ID")]
        shift_template_id: Option<i64>,
    },

    /// Close a running entry
    ClockOut {
        #[arg(value_name = "ENTRY_ID")]
        entry_id: i64,
    },
}

/// Parse a CLI value through the type's snake_case serde representation
fn parse_snake_case<T: DeserializeOwned>(value: &str) -> std::result::Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_ascii_lowercase()))
        .map_err(|_| format!("unrecognised value '{value}'"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<chronodesk_domain::Config> {
    let loaded = match path {
        Some(path) => {
            let mut config = config::load_from_file(Some(path))?;
            config::apply_env_overrides(&mut config)?;
            config
        }
        None => config::load()?,
    };
    Ok(loaded)
}

fn calendar_query(
    start: NaiveDate,
    end: NaiveDate,
    user_id: Option<i64>,
    types: Vec<CalendarEventType>,
) -> Result<CalendarQuery> {
    let last_second =
        NaiveTime::from_hms_opt(23, 59, 59).ok_or_else(|| anyhow!("invalid end-of-day time"))?;
    let mut query =
        CalendarQuery::between(start.and_time(NaiveTime::MIN).and_utc(), end.and_time(last_second).and_utc())
            .with_types(types);
    if let Some(user_id) = user_id {
        query = query.for_user(user_id);
    }
    Ok(query)
}

async fn run(cli: Cli) -> Result<()> {
    let dotenv = dotenvy::dotenv().ok();
    let config = load_config(cli.config)?;
    init_tracing(&config.logging)?;
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let ctx = AppContext::new_with_config(config).context("failed to initialise client")?;

    match cli.command {
        Commands::Login { email, password } => {
            let user = commands::login(&ctx, &email, &password).await?;
            print_json(&user)
        }
        Commands::Logout => {
            commands::logout(&ctx).await?;
            print_json(&serde_json::json!({ "logged_out": true }))
        }
        Commands::Dashboard { company_id } => {
            print_json(&commands::get_dashboard(&ctx, company_id).await?)
        }
        Commands::Settings { command: SettingsCommands::Get { company_id } } => {
            print_json(&commands::get_company_settings(&ctx, company_id).await?)
        }
        Commands::Settings {
            command:
                SettingsCommands::Update { company_id, timezone, locale, week_starts_on, daily_hours_target },
        } => {
            let update = CompanySettingsUpdate {
                timezone,
                locale,
                week_starts_on,
                daily_hours_target,
                ..CompanySettingsUpdate::default()
            };
            if update.is_empty() {
                return Err(anyhow!("nothing to update; pass at least one setting flag"));
            }
            print_json(&commands::update_company_settings(&ctx, company_id, &update).await?)
        }
        Commands::Notifications { unread } => {
            print_json(&commands::list_notifications(&ctx, unread).await?)
        }
        Commands::Calendar { start, end, user_id, types } => {
            let query = calendar_query(start, end, user_id, types)?;
            print_json(&commands::list_calendar_events(&ctx, &query).await?)
        }
        Commands::Entries { command: Some(EntryCommands::ClockIn { notes, shift_template_id }), .. } => {
            let request = ClockInRequest { notes, shift_template_id };
            print_json(&commands::clock_in(&ctx, &request).await?)
        }
        Commands::Entries { command: Some(EntryCommands::ClockOut { entry_id }), .. } => {
            print_json(&commands::clock_out(&ctx, entry_id).await?)
        }
        Commands::Entries { command: None, user_id, from, to, status } => {
            let filter = TimeEntryFilter { user_id, from, to, status };
            print_json(&commands::list_time_entries(&ctx, &filter).await?)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
