use anyhow::Result;

use crate::domain::{
    case::CaseStatus,
    dashboard_state::{DashboardState, Focus},
    events::{AppEvent, KeyInput},
    notice::Notice,
    text_input_state::MAX_INPUT_LENGTH,
};

use super::{
    assign_case::{AssignCaseCommand, AssignError, AssignmentEngine},
    contracts::{Clock, DashboardOrchestrator},
    manage_team,
};

pub struct DefaultDashboardOrchestrator<C>
where
    C: Clock,
{
    state: DashboardState,
    engine: AssignmentEngine<C>,
}

impl<C> DefaultDashboardOrchestrator<C>
where
    C: Clock,
{
    pub fn new(state: DashboardState, clock: C) -> Self {
        Self {
            state,
            engine: AssignmentEngine::new(clock),
        }
    }

    fn handle_command_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "j" | "down" => self.state.select_next(),
            "k" | "up" => self.state.select_previous(),
            " " => self.toggle_selected_working(),
            "d" => self.remove_selected_member(),
            "n" => self.state.set_focus(Focus::MemberInput),
            "c" => self.state.set_focus(Focus::CaseInput),
            "m" => {
                let mode = self.state.assignment_mode().toggled();
                self.state.set_assignment_mode(mode);
                tracing::debug!(mode = mode.as_label(), "assignment mode changed");
                self.state
                    .set_notice(Notice::success(format!("Assignment mode: {}", mode.as_label())));
            }
            "s" => {
                let status = self.state.manual_status().cycle();
                self.state.set_manual_status(status);
            }
            "f" => self.toggle_selected_member_filter(),
            "1" => self.toggle_status_filter(CaseStatus::Open),
            "2" => self.toggle_status_filter(CaseStatus::InProgress),
            "3" => self.toggle_status_filter(CaseStatus::Closed),
            "x" => {
                self.state.filter_mut().clear();
                self.state.set_notice(Notice::success("Filters cleared"));
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "esc" => {
                if let Some(input) = self.state.active_input_mut() {
                    input.clear();
                }
                self.state.set_focus(Focus::Team);
            }
            "enter" => match self.state.focus() {
                Focus::MemberInput => self.submit_member(),
                Focus::CaseInput => self.submit_case(),
                Focus::Team => {}
            },
            "backspace" => {
                if let Some(input) = self.state.active_input_mut() {
                    input.delete_char_before();
                }
            }
            "left" => {
                if let Some(input) = self.state.active_input_mut() {
                    input.move_cursor_left();
                }
            }
            "right" => {
                if let Some(input) = self.state.active_input_mut() {
                    input.move_cursor_right();
                }
            }
            _ => {
                let (Some(ch), Some(input)) = (key.as_char(), self.state.active_input_mut())
                else {
                    return;
                };
                if !input.insert_char(ch) {
                    self.state.set_notice(Notice::warning(format!(
                        "Input is limited to {MAX_INPUT_LENGTH} characters."
                    )));
                }
            }
        }
    }

    fn submit_member(&mut self) {
        let name = self.state.member_input().text().to_owned();

        match manage_team::add_member(self.state.team_mut(), &name) {
            Ok(added) => {
                if let Some(input) = self.state.active_input_mut() {
                    input.clear();
                }
                self.state.clamp_selection();
                self.state.set_focus(Focus::Team);
                self.state.set_notice(Notice::success(format!("Added {added}")));
            }
            Err(error) => {
                tracing::warn!(member = %name, %error, "member not added");
                self.state.set_notice(Notice::warning(error.to_string()));
            }
        }
    }

    fn submit_case(&mut self) {
        let command = AssignCaseCommand {
            case_id: self.state.case_input().text().to_owned(),
            mode: self.state.assignment_mode(),
            assignee: self.state.selected_member().map(str::to_owned),
            status: self.state.manual_status(),
        };

        let (team, store) = self.state.assignment_parts_mut();
        match self.engine.assign(team, store, command) {
            Ok(case) => {
                if let Some(input) = self.state.active_input_mut() {
                    input.clear();
                }
                self.state.set_notice(Notice::success(format!(
                    "Case {} assigned to {}",
                    case.case_id, case.assigned_to
                )));
            }
            Err(error) => {
                tracing::warn!(%error, "case not assigned");
                let notice = match error {
                    AssignError::NoMembersAvailable => Notice::error(error.to_string()),
                    _ => Notice::warning(error.to_string()),
                };
                self.state.set_notice(notice);
            }
        }
    }

    fn remove_selected_member(&mut self) {
        let Some(name) = self.state.selected_member().map(str::to_owned) else {
            self.state
                .set_notice(Notice::warning("Select a team member to remove."));
            return;
        };

        match manage_team::remove_member(self.state.team_mut(), &name) {
            Ok(()) => {
                if self.state.filter_mut().remove_member(&name) {
                    tracing::debug!(member = %name, "member filter dropped with member");
                }
                self.state.clamp_selection();
                self.state.set_notice(Notice::success(format!("Removed {name}")));
            }
            Err(error) => self.state.set_notice(Notice::warning(error.to_string())),
        }
    }

    fn toggle_selected_working(&mut self) {
        let Some(name) = self.state.selected_member().map(str::to_owned) else {
            return;
        };

        match manage_team::toggle_working(self.state.team_mut(), &name) {
            Ok(true) => self
                .state
                .set_notice(Notice::success(format!("{name} is working today"))),
            Ok(false) => self
                .state
                .set_notice(Notice::success(format!("{name} is off today"))),
            Err(error) => self.state.set_notice(Notice::warning(error.to_string())),
        }
    }

    fn toggle_selected_member_filter(&mut self) {
        let Some(name) = self.state.selected_member().map(str::to_owned) else {
            return;
        };

        let active = self.state.filter_mut().toggle_member(&name);
        tracing::debug!(member = %name, active, "member filter toggled");
    }

    fn toggle_status_filter(&mut self, status: CaseStatus) {
        let active = self.state.filter_mut().toggle_status(status);
        tracing::debug!(status = status.as_label(), active, "status filter toggled");
    }
}

impl<C> DashboardOrchestrator for DefaultDashboardOrchestrator<C>
where
    C: Clock,
{
    fn state(&self) -> &DashboardState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::Resized => self.state.mark_dirty(),
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => {
                if self.state.focus().is_editing() {
                    self.handle_editing_key(&key);
                } else {
                    self.handle_command_key(&key);
                }
            }
        }

        Ok(())
    }
}
