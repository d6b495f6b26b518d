//! Use case layer: application workflows and orchestration.

pub mod assign_case;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod dashboard;
pub mod manage_team;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
