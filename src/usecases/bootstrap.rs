use std::path::Path;

use crate::{
    domain::dashboard_state::DashboardState,
    infra::{
        self, clock::SystemClock, config::FileConfigAdapter, contracts::ConfigAdapter,
        error::AppError, storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, DashboardOrchestrator},
        dashboard::DefaultDashboardOrchestrator,
        manage_team::build_initial_team,
    },
};

pub struct ComposedShell {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn DashboardOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    context.layout.ensure_dirs()?;
    infra::logging::init(&context.config.logging, &context.layout)?;

    Ok(context)
}

pub fn compose_shell(context: &AppContext) -> ComposedShell {
    ComposedShell {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(compose_orchestrator(context)),
    }
}

fn compose_orchestrator(context: &AppContext) -> DefaultDashboardOrchestrator<SystemClock> {
    let team = build_initial_team(&context.config.team);
    tracing::info!(
        team_size = team.len(),
        working_today = team.working_members().count(),
        mode = context.config.assignment.mode.as_label(),
        "dashboard session initialized"
    );

    let state = DashboardState::new(
        team,
        context.config.assignment.mode,
        context.config.assignment.default_status,
    );
    DefaultDashboardOrchestrator::new(state, SystemClock)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;
    let layout = StorageLayout::resolve()?.with_log_dir(config.logging.directory.clone());

    Ok(AppContext::new(config, layout))
}
