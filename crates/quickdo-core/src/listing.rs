use crate::api::{ApiError, Task, TaskService};
use crate::section::resolve_active_section;

/// One listing snapshot. Display indices 1..N are positional in `tasks`
/// and valid only for the lifetime of this snapshot; a later add/list/check
/// cycle invalidates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The project has no sections, so there is nothing to scope to.
    NoSection,
    Section {
        section_id: String,
        tasks: Vec<Task>,
    },
}

impl Listing {
    pub fn tasks(&self) -> &[Task] {
        match self {
            Listing::NoSection => &[],
            Listing::Section { tasks, .. } => tasks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }
}

/// Fetches the project's tasks and filters them to the active section,
/// preserving service order. One `list_sections` call, one `list_tasks`
/// call, no per-task fetching.
pub fn list_scoped_tasks(
    service: &dyn TaskService,
    project_id: &str,
) -> Result<Listing, ApiError> {
    let Some(section_id) = resolve_active_section(service, project_id)? else {
        return Ok(Listing::NoSection);
    };
    let tasks = service
        .list_tasks(project_id)?
        .into_iter()
        .filter(|task| task.section_id.as_deref() == Some(section_id.as_str()))
        .collect();
    Ok(Listing::Section { section_id, tasks })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub identifier: String,
    /// Position of the matched task in the listing, if any.
    pub matched: Option<usize>,
}

/// Resolves each identifier against one listing snapshot. Pure lookup: no
/// refetching, no side effects, input order preserved.
pub fn resolve_identifiers(identifiers: &[String], tasks: &[Task]) -> Vec<Resolution> {
    identifiers
        .iter()
        .map(|identifier| Resolution {
            identifier: identifier.clone(),
            matched: resolve_one(identifier, tasks),
        })
        .collect()
}

fn resolve_one(identifier: &str, tasks: &[Task]) -> Option<usize> {
    // Display indices take precedence over literal contents, even when a
    // task's content is itself a numeric string.
    if let Ok(index) = identifier.parse::<usize>() {
        if (1..=tasks.len()).contains(&index) {
            return Some(index - 1);
        }
    }
    // Exact, case-sensitive, untrimmed content match. Duplicate contents
    // resolve to the first task in listing order.
    tasks.iter().position(|task| task.content == identifier)
}
