use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown task status: {0:?}")]
    UnknownStatus(String),

    #[error("unknown status filter: {0:?} (expected All Tasks, Pending, In Progress or Completed)")]
    UnknownFilter(String),

    #[error("unknown sort order: {0:?} (expected Due Date, Priority, Points or Status)")]
    UnknownSortKey(String),

    #[error("duplicate task id: {0}")]
    DuplicateTaskId(String),

    #[error("invalid task data: {0}")]
    TaskData(#[from] serde_json::Error),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
