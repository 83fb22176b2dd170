use crate::api::{ApiError, Task, TaskService};
use crate::listing::{list_scoped_tasks, resolve_identifiers};
use crate::section::resolve_active_section;

pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionFailure {
    /// Task content when the close call failed, otherwise the raw identifier.
    pub label: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionReport {
    pub completed: Vec<String>,
    pub failed: Vec<CompletionFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Empty identifier list or empty listing; zero close calls were made.
    NothingToComplete,
    Report(CompletionReport),
}

/// Completes tasks by display index or exact content. The scoped listing is
/// fetched once; every identifier is then resolved and attempted
/// independently, so one failed close does not abort the rest. Both report
/// lists preserve input identifier order.
pub fn complete_tasks(
    service: &dyn TaskService,
    identifiers: &[String],
    project_id: &str,
) -> Result<CompletionOutcome, ApiError> {
    if identifiers.is_empty() {
        return Ok(CompletionOutcome::NothingToComplete);
    }
    let listing = list_scoped_tasks(service, project_id)?;
    let tasks = listing.tasks();
    if tasks.is_empty() {
        return Ok(CompletionOutcome::NothingToComplete);
    }

    let mut report = CompletionReport::default();
    for resolution in resolve_identifiers(identifiers, tasks) {
        match resolution.matched {
            Some(position) => {
                let task = &tasks[position];
                match service.close_task(&task.id) {
                    Ok(()) => report.completed.push(task.content.clone()),
                    Err(err) => report.failed.push(CompletionFailure {
                        label: task.content.clone(),
                        reason: err.to_string(),
                    }),
                }
            }
            None => report.failed.push(CompletionFailure {
                label: resolution.identifier,
                reason: NOT_FOUND.to_string(),
            }),
        }
    }
    Ok(CompletionOutcome::Report(report))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFailure {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    pub added: Vec<Task>,
    pub failed: Vec<AddFailure>,
}

/// Adds tasks to the project's active section. The section is resolved once
/// for the whole batch; a section lookup failure aborts before any create
/// call, while "no sections" proceeds without a section id. Create calls are
/// independent per name.
pub fn add_tasks(
    service: &dyn TaskService,
    names: &[String],
    project_id: &str,
) -> Result<AddReport, ApiError> {
    let section_id = resolve_active_section(service, project_id)?;
    let mut report = AddReport::default();
    for name in names {
        match service.create_task(name, project_id, section_id.as_deref()) {
            Ok(task) => report.added.push(task),
            Err(err) => report.failed.push(AddFailure {
                name: name.clone(),
                reason: err.to_string(),
            }),
        }
    }
    Ok(report)
}
