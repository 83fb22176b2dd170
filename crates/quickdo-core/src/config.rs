use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TODOIST_TOKEN is not set; export your Todoist API token")]
    MissingToken,
    #[error("INBOX_ID is not set; export the id of your default project")]
    MissingInboxId,
}

/// Process configuration, read once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub inbox_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = read_env("TODOIST_TOKEN").ok_or(ConfigError::MissingToken)?;
        let inbox_id = read_env("INBOX_ID").ok_or(ConfigError::MissingInboxId)?;
        Ok(Self { token, inbox_id })
    }
}

fn read_env(name: &str) -> Option<String> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

pub fn resolve_user_home_dir() -> Option<PathBuf> {
    if let Some(home) = read_env("HOME") {
        return Some(PathBuf::from(home));
    }
    if let Some(profile) = read_env("USERPROFILE") {
        return Some(PathBuf::from(profile));
    }
    None
}

/// State directory for marker files: `QUICKDO_HOME` or `~/.quickdo`.
pub fn resolve_quickdo_home_dir() -> Option<PathBuf> {
    if let Some(value) = read_env("QUICKDO_HOME") {
        return Some(PathBuf::from(value));
    }
    resolve_user_home_dir().map(|home| home.join(".quickdo"))
}

/// Checkout the daily self-update hook pulls; unset disables the hook.
pub fn resolve_update_repo() -> Option<PathBuf> {
    read_env("QUICKDO_REPO").map(PathBuf::from)
}
