use super::{
    assignment::AssignmentMode,
    case::CaseStatus,
    case_store::{count_by_member, CaseFilter, CaseStore, WorkloadSummary},
    notice::Notice,
    team::TeamRegistry,
    text_input_state::TextInputState,
};

/// Which widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Team,
    MemberInput,
    CaseInput,
}

impl Focus {
    pub fn is_editing(self) -> bool {
        !matches!(self, Self::Team)
    }
}

/// Whole session state of the dashboard.
///
/// Every mutable accessor marks the state for redraw, so the shell only
/// repaints after something actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    running: bool,
    team: TeamRegistry,
    cases: CaseStore,
    filter: CaseFilter,
    assignment_mode: AssignmentMode,
    manual_status: CaseStatus,
    selected_member: Option<usize>,
    member_input: TextInputState,
    case_input: TextInputState,
    focus: Focus,
    notice: Option<Notice>,
    needs_redraw: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            running: true,
            team: TeamRegistry::default(),
            cases: CaseStore::default(),
            filter: CaseFilter::default(),
            assignment_mode: AssignmentMode::default(),
            manual_status: CaseStatus::default(),
            selected_member: None,
            member_input: TextInputState::default(),
            case_input: TextInputState::default(),
            focus: Focus::default(),
            notice: None,
            needs_redraw: true,
        }
    }
}

impl DashboardState {
    pub fn new(team: TeamRegistry, assignment_mode: AssignmentMode, status: CaseStatus) -> Self {
        let mut state = Self {
            team,
            assignment_mode,
            manual_status: status,
            ..Self::default()
        };
        state.clamp_selection();
        state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn team(&self) -> &TeamRegistry {
        &self.team
    }

    pub fn cases(&self) -> &CaseStore {
        &self.cases
    }

    pub fn filter(&self) -> &CaseFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut CaseFilter {
        self.needs_redraw = true;
        &mut self.filter
    }

    /// Team and case store borrowed together for assignment.
    pub fn assignment_parts_mut(&mut self) -> (&mut TeamRegistry, &mut CaseStore) {
        self.needs_redraw = true;
        (&mut self.team, &mut self.cases)
    }

    pub fn team_mut(&mut self) -> &mut TeamRegistry {
        self.needs_redraw = true;
        &mut self.team
    }

    /// Summary of the currently filtered view.
    pub fn workload(&self) -> WorkloadSummary {
        count_by_member(self.cases.filter(&self.filter))
    }

    pub fn assignment_mode(&self) -> AssignmentMode {
        self.assignment_mode
    }

    pub fn set_assignment_mode(&mut self, mode: AssignmentMode) {
        self.needs_redraw = true;
        self.assignment_mode = mode;
    }

    pub fn manual_status(&self) -> CaseStatus {
        self.manual_status
    }

    pub fn set_manual_status(&mut self, status: CaseStatus) {
        self.needs_redraw = true;
        self.manual_status = status;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_member
    }

    pub fn selected_member(&self) -> Option<&str> {
        self.selected_member
            .and_then(|index| self.team.members().get(index))
            .map(String::as_str)
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_member else {
            return;
        };

        self.needs_redraw = true;
        let last_index = self.team.len().saturating_sub(1);
        self.selected_member = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_member else {
            return;
        };

        self.needs_redraw = true;
        self.selected_member = Some(index.saturating_sub(1));
    }

    /// Re-anchors the member cursor after the team changed size.
    pub fn clamp_selection(&mut self) {
        self.needs_redraw = true;
        self.selected_member = match (self.team.len(), self.selected_member) {
            (0, _) => None,
            (len, Some(index)) => Some(index.min(len - 1)),
            (_, None) => Some(0),
        };
    }

    pub fn member_input(&self) -> &TextInputState {
        &self.member_input
    }

    pub fn case_input(&self) -> &TextInputState {
        &self.case_input
    }

    /// The text field owned by the current focus, if editing.
    pub fn active_input_mut(&mut self) -> Option<&mut TextInputState> {
        self.needs_redraw = true;
        match self.focus {
            Focus::Team => None,
            Focus::MemberInput => Some(&mut self.member_input),
            Focus::CaseInput => Some(&mut self.case_input),
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.needs_redraw = true;
        self.focus = focus;
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.needs_redraw = true;
        self.notice = Some(notice);
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns whether a redraw is pending and resets the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }
}
