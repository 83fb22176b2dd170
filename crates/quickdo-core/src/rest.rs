use reqwest::blocking::{Client, Response};
use serde_json::json;

use crate::api::{ApiError, Section, Task, TaskService};

pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v2";

const BODY_EXCERPT_CHARS: usize = 300;

/// Blocking Todoist REST v2 client. One attempt per call; callers decide
/// how a failure degrades.
pub struct RestClient {
    http: Client,
    base_url: String,
    token: String,
}

impl RestClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn check(method: &'static str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let body: String = response
            .text()
            .unwrap_or_default()
            .chars()
            .take(BODY_EXCERPT_CHARS)
            .collect();
        Err(ApiError::Status {
            method,
            url,
            status: status.as_u16(),
            body,
        })
    }
}

impl TaskService for RestClient {
    fn list_sections(&self, project_id: &str) -> Result<Vec<Section>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("sections"))
            .query(&[("project_id", project_id)])
            .bearer_auth(&self.token)
            .send()?;
        Ok(Self::check("GET", response)?.json()?)
    }

    fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("tasks"))
            .query(&[("project_id", project_id)])
            .bearer_auth(&self.token)
            .send()?;
        Ok(Self::check("GET", response)?.json()?)
    }

    fn create_task(
        &self,
        content: &str,
        project_id: &str,
        section_id: Option<&str>,
    ) -> Result<Task, ApiError> {
        let mut body = json!({
            "content": content,
            "project_id": project_id,
        });
        if let Some(section_id) = section_id {
            body["section_id"] = json!(section_id);
        }
        let response = self
            .http
            .post(self.endpoint("tasks"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;
        Ok(Self::check("POST", response)?.json()?)
    }

    fn close_task(&self, task_id: &str) -> Result<(), ApiError> {
        // Close returns 204 with an empty body.
        let response = self
            .http
            .post(self.endpoint(&format!("tasks/{task_id}/close")))
            .bearer_auth(&self.token)
            .send()?;
        Self::check("POST", response)?;
        Ok(())
    }
}
