//! Use case for assigning a case to a team member.
//!
//! Two strategies are supported: round-robin rotation over the whole team,
//! and manual selection restricted to members working today. A successful
//! assignment appends exactly one case; a failed one leaves every piece of
//! state untouched.

use thiserror::Error;

use crate::domain::{
    assignment::AssignmentMode,
    case::{Case, CaseStatus},
    case_store::CaseStore,
    team::TeamRegistry,
};

use super::contracts::Clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignCaseCommand {
    pub case_id: String,
    pub mode: AssignmentMode,
    /// Required for manual assignment; ignored by round-robin.
    pub assignee: Option<String>,
    /// Status for manual assignment; round-robin cases always start open.
    pub status: CaseStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("Enter a case id before assigning.")]
    MissingCaseId,
    #[error("No team members available to assign cases.")]
    NoMembersAvailable,
    #[error("{0} is not working today.")]
    InvalidAssignee(String),
    #[error("Select a team member to assign the case to.")]
    NoAssigneeSelected,
}

pub struct AssignmentEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> AssignmentEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn assign(
        &self,
        team: &mut TeamRegistry,
        store: &mut CaseStore,
        command: AssignCaseCommand,
    ) -> Result<Case, AssignError> {
        match command.mode {
            AssignmentMode::RoundRobin => self.assign_round_robin(team, store, &command.case_id),
            AssignmentMode::Manual => match command.assignee.as_deref() {
                Some(assignee) => {
                    self.assign_manual(team, store, &command.case_id, assignee, command.status)
                }
                None => {
                    normalize_case_id(&command.case_id)?;
                    Err(AssignError::NoAssigneeSelected)
                }
            },
        }
    }

    /// Picks the member at the rotation cursor and advances it.
    pub fn assign_round_robin(
        &self,
        team: &mut TeamRegistry,
        store: &mut CaseStore,
        case_id: &str,
    ) -> Result<Case, AssignError> {
        let case_id = normalize_case_id(case_id)?;
        let assigned_to = team
            .next_in_rotation()
            .ok_or(AssignError::NoMembersAvailable)?;

        Ok(self.record(store, case_id, assigned_to, CaseStatus::Open))
    }

    pub fn assign_manual(
        &self,
        team: &TeamRegistry,
        store: &mut CaseStore,
        case_id: &str,
        assignee: &str,
        status: CaseStatus,
    ) -> Result<Case, AssignError> {
        let case_id = normalize_case_id(case_id)?;
        if !team.is_working(assignee) {
            return Err(AssignError::InvalidAssignee(assignee.to_owned()));
        }

        Ok(self.record(store, case_id, assignee.to_owned(), status))
    }

    fn record(
        &self,
        store: &mut CaseStore,
        case_id: String,
        assigned_to: String,
        status: CaseStatus,
    ) -> Case {
        let case = Case {
            case_id,
            assigned_to,
            created_at: self.clock.now(),
            status,
        };
        store.append(case.clone());

        tracing::info!(
            case_id = %case.case_id,
            assigned_to = %case.assigned_to,
            status = case.status.as_label(),
            "case assigned"
        );

        case
    }
}

fn normalize_case_id(case_id: &str) -> Result<String, AssignError> {
    let case_id = case_id.trim();
    if case_id.is_empty() {
        return Err(AssignError::MissingCaseId);
    }

    Ok(case_id.to_owned())
}
