use anyhow::Result;

use crate::{
    domain::dashboard_state::DashboardState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, DashboardOrchestrator},
    },
};

use super::{terminal::DashboardTerminal, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn DashboardOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        log_dir = %context.layout.log_dir.display(),
        "starting dashboard"
    );

    let mut terminal = DashboardTerminal::new()?;
    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })?;

    tracing::info!(cases = orchestrator.state().cases().len(), "dashboard closed");
    Ok(())
}

/// Feeds events to the orchestrator, redrawing only after the state changed.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn DashboardOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&DashboardState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        if orchestrator.state_mut().take_redraw() {
            draw(orchestrator.state())?;
        }

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
