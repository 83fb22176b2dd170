use std::path::Path;

use anyhow::Result;
use quickdo_core::api::TaskService;
use quickdo_core::config::{self, Config};
use quickdo_core::listing::{self, Listing};
use quickdo_core::task_ops::{self, CompletionOutcome};
use quickdo_core::update::{self, UpdateStatus};

use crate::Command;

/// Runs one command against the remote service. Remote failures degrade to
/// printed messages; only I/O on the local terminal can surface an error.
pub fn dispatch(service: &dyn TaskService, config: &Config, command: Command) -> Result<()> {
    match command {
        Command::Add {
            task_names,
            project_id,
        } => add(service, &task_names, project(config, project_id.as_deref())),
        Command::Ls { project_id } => list(service, project(config, project_id.as_deref())),
        Command::Check {
            identifiers,
            project_id,
        } => check(service, &identifiers, project(config, project_id.as_deref())),
    }
    Ok(())
}

fn project<'a>(config: &'a Config, explicit: Option<&'a str>) -> &'a str {
    explicit.unwrap_or(&config.inbox_id)
}

fn add(service: &dyn TaskService, names: &[String], project_id: &str) {
    match task_ops::add_tasks(service, names, project_id) {
        Ok(report) => {
            for task in &report.added {
                println!(
                    "Added task {}: {} (section: {})",
                    task.id,
                    task.content,
                    task.section_id.as_deref().unwrap_or("none")
                );
            }
            for failure in &report.failed {
                println!("Could not add {}: {}", failure.name, failure.reason);
            }
        }
        Err(err) => println!("Could not resolve a section for project {project_id}: {err}"),
    }
}

fn list(service: &dyn TaskService, project_id: &str) {
    match listing::list_scoped_tasks(service, project_id) {
        Ok(Listing::NoSection) => println!("Project has no sections."),
        Ok(Listing::Section { section_id, tasks }) => {
            if tasks.is_empty() {
                println!("Section {section_id} has no tasks.");
                return;
            }
            println!("Tasks in section {section_id}:");
            for (position, task) in tasks.iter().enumerate() {
                println!("- {}: {}", position + 1, task.content);
            }
        }
        Err(err) => println!("Could not fetch tasks: {err}"),
    }
}

fn check(service: &dyn TaskService, identifiers: &[String], project_id: &str) {
    match task_ops::complete_tasks(service, identifiers, project_id) {
        Ok(CompletionOutcome::NothingToComplete) => println!("Nothing to complete."),
        Ok(CompletionOutcome::Report(report)) => {
            if !report.completed.is_empty() {
                println!("Completed: {}", report.completed.join(", "));
            }
            if !report.failed.is_empty() {
                let rendered: Vec<String> = report
                    .failed
                    .iter()
                    .map(|failure| format!("{} ({})", failure.label, failure.reason))
                    .collect();
                println!("Not completed: {}", rendered.join(", "));
            }
        }
        Err(err) => println!("Could not fetch tasks: {err}"),
    }
}

/// Once-per-day self-update: pulls the checkout named by QUICKDO_REPO,
/// gated by the marker file under the quickdo home directory. Disabled
/// when QUICKDO_REPO is unset.
pub fn run_daily_update() {
    let Some(repo) = config::resolve_update_repo() else {
        return;
    };
    let Some(home) = config::resolve_quickdo_home_dir() else {
        return;
    };
    let today = update::today_stamp();
    match update::run_if_due(&home, &today, || pull_repo(&repo)) {
        Ok(UpdateStatus::Ran) => println!("Self-update: pulled latest changes."),
        Ok(UpdateStatus::Skipped) => {}
        Err(err) => eprintln!("Self-update skipped: {err}"),
    }
}

fn pull_repo(repo: &Path) -> Result<(), String> {
    let git = which::which("git").map_err(|err| format!("git not found: {err}"))?;
    let output = std::process::Command::new(git)
        .arg("-C")
        .arg(repo)
        .args(["pull", "--ff-only"])
        .output()
        .map_err(|err| err.to_string())?;
    if output.status.success() {
        return Ok(());
    }
    Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
}
