mod commands;
mod shell;
mod version;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quickdo_core::config::Config;
use quickdo_core::rest::RestClient;

#[derive(Parser)]
#[command(
    name = "quickdo",
    version = version::FULL,
    about = "Todoist command-line client for first-section task flow"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add one or more tasks to the project's first section
    Add {
        /// Task names to add
        #[arg(required = true)]
        task_names: Vec<String>,
        /// Project id (defaults to INBOX_ID)
        #[arg(short = 'p', long = "project_id")]
        project_id: Option<String>,
    },
    /// List tasks in the project's first section
    #[command(visible_alias = "li")]
    Ls {
        /// Project id (defaults to INBOX_ID)
        #[arg(short = 'p', long = "project_id")]
        project_id: Option<String>,
    },
    /// Complete tasks by display index or exact name
    #[command(visible_alias = "c")]
    Check {
        /// Display indices or exact task names
        #[arg(required = true)]
        identifiers: Vec<String>,
        /// Project id (defaults to INBOX_ID)
        #[arg(short = 'p', long = "project_id")]
        project_id: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("quickdo: {err}");
            std::process::exit(1);
        }
    };

    // First run of the day may pull the tool's own checkout; never lets a
    // failure block the command.
    commands::run_daily_update();

    let client = RestClient::new(config.token.clone());
    match cli.command {
        Some(command) => commands::dispatch(&client, &config, command),
        None => shell::run(&client, &config),
    }
}
