//! Domain layer: team, cases, and dashboard session state.

pub mod assignment;
pub mod case;
pub mod case_store;
pub mod dashboard_state;
pub mod events;
pub mod notice;
pub mod team;
pub mod text_input_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
