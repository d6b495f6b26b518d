use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap, contracts::DashboardOrchestrator},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;

            let cases = shell.orchestrator.state().cases().len();
            println!("{}", session_summary(cases));
        }
    }

    Ok(())
}

fn session_summary(cases: usize) -> String {
    match cases {
        0 => "Session ended. No cases were assigned.".to_owned(),
        1 => "Session ended. 1 case was assigned; session data is not kept.".to_owned(),
        n => format!("Session ended. {n} cases were assigned; session data is not kept."),
    }
}
