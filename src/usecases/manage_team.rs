//! Use cases for maintaining the team roster and the "working today" set.

use crate::{
    domain::team::{TeamError, TeamRegistry},
    infra::config::TeamConfig,
};

/// Builds the session's starting team from configuration.
///
/// Invalid entries are skipped with a warning instead of failing startup.
/// Without an explicit `working_today` list the whole team is working.
pub fn build_initial_team(config: &TeamConfig) -> TeamRegistry {
    let mut team = TeamRegistry::default();

    for name in &config.members {
        if let Err(error) = team.add(name) {
            tracing::warn!(member = %name, %error, "skipping configured team member");
        }
    }

    let working: Vec<String> = match &config.working_today {
        Some(names) => names.clone(),
        None => team.members().to_vec(),
    };

    for name in working {
        if let Err(error) = team.set_working(name.trim(), true) {
            tracing::warn!(member = %name, %error, "skipping configured working member");
        }
    }

    team
}

pub fn add_member(team: &mut TeamRegistry, name: &str) -> Result<String, TeamError> {
    let added = team.add(name)?;
    tracing::info!(member = %added, team_size = team.len(), "team member added");
    Ok(added)
}

pub fn remove_member(team: &mut TeamRegistry, name: &str) -> Result<(), TeamError> {
    team.remove(name)?;
    tracing::info!(member = %name, team_size = team.len(), "team member removed");
    Ok(())
}

pub fn toggle_working(team: &mut TeamRegistry, name: &str) -> Result<bool, TeamError> {
    let working = team.toggle_working(name)?;
    tracing::info!(member = %name, working, "working today updated");
    Ok(working)
}
