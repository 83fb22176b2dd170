use serde::Deserialize;
use thiserror::Error;

/// Read-only snapshot of a remote task. The remote service owns the entity;
/// the client never mutates a `Task` it holds.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub section_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub project_id: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },
}

/// Boundary to the hosted task service. Four operations, all blocking,
/// single attempt each; retry policy is the caller's problem.
pub trait TaskService {
    fn list_sections(&self, project_id: &str) -> Result<Vec<Section>, ApiError>;
    fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError>;
    fn create_task(
        &self,
        content: &str,
        project_id: &str,
        section_id: Option<&str>,
    ) -> Result<Task, ApiError>;
    fn close_task(&self, task_id: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::{Cell, RefCell};

    use super::{ApiError, Section, Task, TaskService};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        ListSections(String),
        ListTasks(String),
        Create {
            content: String,
            project_id: String,
            section_id: Option<String>,
        },
        Close(String),
    }

    /// Programmable in-memory stand-in for the remote service.
    #[derive(Default)]
    pub struct MockService {
        pub sections: Vec<Section>,
        pub tasks: Vec<Task>,
        pub fail_sections: bool,
        pub fail_tasks: bool,
        pub fail_create_for: Vec<String>,
        pub fail_close_for: Vec<String>,
        pub calls: RefCell<Vec<Call>>,
        pub next_id: Cell<u64>,
    }

    impl MockService {
        pub fn with_tasks(section_id: &str, contents: &[&str]) -> Self {
            let service = MockService {
                sections: vec![section(section_id, "First", "p1")],
                ..Default::default()
            };
            MockService {
                tasks: contents
                    .iter()
                    .enumerate()
                    .map(|(i, content)| task(&format!("t{}", i + 1), content, Some(section_id)))
                    .collect(),
                ..service
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn close_calls(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    Call::Close(id) => Some(id),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }
    }

    pub fn remote_error(detail: &str) -> ApiError {
        ApiError::Status {
            method: "GET",
            url: "mock://todoist".to_string(),
            status: 500,
            body: detail.to_string(),
        }
    }

    pub fn task(id: &str, content: &str, section_id: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            content: content.to_string(),
            section_id: section_id.map(str::to_string),
        }
    }

    pub fn section(id: &str, name: &str, project_id: &str) -> Section {
        Section {
            id: id.to_string(),
            name: name.to_string(),
            project_id: project_id.to_string(),
            order: 1,
        }
    }

    impl TaskService for MockService {
        fn list_sections(&self, project_id: &str) -> Result<Vec<Section>, ApiError> {
            self.record(Call::ListSections(project_id.to_string()));
            if self.fail_sections {
                return Err(remote_error("sections unavailable"));
            }
            Ok(self.sections.clone())
        }

        fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
            self.record(Call::ListTasks(project_id.to_string()));
            if self.fail_tasks {
                return Err(remote_error("tasks unavailable"));
            }
            Ok(self.tasks.clone())
        }

        fn create_task(
            &self,
            content: &str,
            project_id: &str,
            section_id: Option<&str>,
        ) -> Result<Task, ApiError> {
            self.record(Call::Create {
                content: content.to_string(),
                project_id: project_id.to_string(),
                section_id: section_id.map(str::to_string),
            });
            if self.fail_create_for.iter().any(|name| name == content) {
                return Err(remote_error("create rejected"));
            }
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            Ok(task(&format!("new-{id}"), content, section_id))
        }

        fn close_task(&self, task_id: &str) -> Result<(), ApiError> {
            self.record(Call::Close(task_id.to_string()));
            if self.fail_close_for.iter().any(|id| id == task_id) {
                return Err(remote_error("close rejected"));
            }
            Ok(())
        }
    }
}
