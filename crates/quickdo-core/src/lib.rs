//! Core logic for the quickdo Todoist client.

pub mod api;
pub mod config;
pub mod listing;
pub mod rest;
pub mod section;
pub mod task_ops;
pub mod update;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
