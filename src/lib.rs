//! DevCatalyst member portal: a terminal dashboard over a fixed set of
//! assigned tasks, with progress statistics and a filterable, sortable task list.

pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod stats;
pub mod task;
pub mod task_store;
pub mod ui;
pub mod view;

pub use error::{DashboardError, Result};
