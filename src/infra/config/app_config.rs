use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{assignment::AssignmentMode, case::CaseStatus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub team: TeamConfig,
    pub assignment: AssignmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Overrides the log directory resolved from the storage layout.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamConfig {
    pub members: Vec<String>,
    /// `None` marks the whole starting team as working today.
    pub working_today: Option<Vec<String>>,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            members: vec!["Alice".to_owned(), "Bob".to_owned(), "Charlie".to_owned()],
            working_today: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AssignmentConfig {
    pub mode: AssignmentMode,
    pub default_status: CaseStatus,
}
