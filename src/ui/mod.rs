//! UI layer: terminal rendering and input for the dashboard.

mod event_source;
pub mod shell;
mod styles;
mod terminal;
mod text_input;
mod view;
mod workload_chart;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
