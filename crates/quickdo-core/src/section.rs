use crate::api::{ApiError, TaskService};

/// Resolves the "active" section of a project: by convention the first
/// section in the order the service returns them. `Ok(None)` means the
/// project has no sections; a failed lookup stays an `Err` so callers can
/// tell the two apart.
pub fn resolve_active_section(
    service: &dyn TaskService,
    project_id: &str,
) -> Result<Option<String>, ApiError> {
    let sections = service.list_sections(project_id)?;
    Ok(sections.into_iter().next().map(|section| section.id))
}
