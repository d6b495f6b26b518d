use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};

use crate::domain::{
    assignment::AssignmentMode,
    case::{Case, CaseStatus},
    case_store::CaseFilter,
    dashboard_state::{DashboardState, Focus},
    team::TeamRegistry,
};

use super::{
    styles,
    text_input::{render_text_input, TextInputView},
    workload_chart::{render_workload_chart, truncate_to_width},
};

const MEMBER_COLUMN_WIDTH: usize = 16;
const KEY_HINTS: &str =
    "n add  d remove  space working  c case  m mode  s status  f/1/2/3 filter  x clear  q quit";

pub fn render(frame: &mut Frame<'_>, state: &DashboardState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [sidebar_area, main_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .areas(content_area);

    // Input fields take 3 lines: 1 border + 1 text + 1 border.
    let [team_area, member_input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .areas(sidebar_area);

    let [case_input_area, cases_area, chart_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(12),
        ])
        .areas(main_area);

    render_team_panel(frame, team_area, state);
    render_text_input(
        frame,
        member_input_area,
        &TextInputView {
            title: "Add member",
            placeholder: "Press 'n' to add a member",
            state: state.member_input(),
            focused: state.focus() == Focus::MemberInput,
        },
    );
    let case_title = assign_title(state);
    render_text_input(
        frame,
        case_input_area,
        &TextInputView {
            title: &case_title,
            placeholder: "Press 'c' to enter a case id",
            state: state.case_input(),
            focused: state.focus() == Focus::CaseInput,
        },
    );
    render_cases_table(frame, cases_area, state);
    render_workload_chart(
        frame,
        chart_area,
        &state.workload(),
        styles::inactive_panel_border_style(),
    );

    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

fn render_team_panel(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let team = state.team();
    let is_active = state.focus() == Focus::Team;
    let border_style = if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let block = Block::default()
        .title(team_title(team))
        .borders(Borders::ALL)
        .border_style(border_style);

    if team.is_empty() {
        let message = Paragraph::new("No team members. Press 'n' to add one.").block(block);
        frame.render_widget(message, area);
        return;
    }

    let show_rotation = state.assignment_mode() == AssignmentMode::RoundRobin;
    let items: Vec<ListItem<'static>> = team
        .members()
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let is_next = show_rotation && index == team.next_index();
            ListItem::new(member_line(member, team.is_working(member), is_next))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles::selected_member_style());

    let mut list_state = ListState::default();
    list_state.select(state.selected_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn team_title(team: &TeamRegistry) -> String {
    format!(
        "Team ({}, {} working)",
        team.len(),
        team.working_members().count()
    )
}

fn member_line(member: &str, working: bool, next_in_rotation: bool) -> Line<'static> {
    let (marker, style) = if working {
        ("\u{25CF} ", styles::working_member_style()) // filled circle
    } else {
        ("\u{25CB} ", styles::off_member_style()) // hollow circle
    };

    let mut spans = vec![
        Span::styled(marker, style),
        Span::styled(member.to_owned(), style),
    ];
    if next_in_rotation {
        spans.push(Span::styled(" \u{2190} next", styles::rotation_marker_style()));
    }

    Line::from(spans)
}

fn assign_title(state: &DashboardState) -> String {
    match state.assignment_mode() {
        AssignmentMode::RoundRobin => "Assign case: Round robin".to_owned(),
        AssignmentMode::Manual => format!(
            "Assign case: Manual to {} as {}",
            state.selected_member().unwrap_or("(nobody)"),
            state.manual_status().as_label()
        ),
    }
}

fn render_cases_table(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let rows: Vec<Row<'static>> = state.cases().filter(state.filter()).map(case_row).collect();
    let title = cases_title(rows.len(), state.cases().len(), state.filter());

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());

    if state.cases().is_empty() {
        frame.render_widget(Paragraph::new("No cases assigned yet.").block(block), area);
        return;
    }

    let header = Row::new(["Case ID", "Assigned To", "Time", "Status"])
        .style(styles::table_header_style());
    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(MEMBER_COLUMN_WIDTH as u16),
            Constraint::Length(19),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(block);

    frame.render_widget(table, area);
}

fn case_row(case: &Case) -> Row<'static> {
    Row::new(vec![
        Cell::from(case.case_id.clone()),
        Cell::from(truncate_to_width(&case.assigned_to, MEMBER_COLUMN_WIDTH)),
        Cell::from(Span::styled(
            case.created_at_label(),
            styles::timestamp_style(),
        )),
        Cell::from(status_badge(case.status)),
    ])
}

fn status_badge(status: CaseStatus) -> Span<'static> {
    Span::styled(
        format!("[{}]", status.as_label()),
        styles::status_badge_style(status),
    )
}

fn cases_title(shown: usize, total: usize, filter: &CaseFilter) -> String {
    if filter.is_empty() {
        return format!("Cases ({total})");
    }

    let mut parts = Vec::new();
    if !filter.members().is_empty() {
        let members: Vec<&str> = filter.members().iter().map(String::as_str).collect();
        parts.push(members.join(", "));
    }
    if !filter.statuses().is_empty() {
        let statuses: Vec<&str> = filter.statuses().iter().map(|s| s.as_label()).collect();
        parts.push(statuses.join(", "));
    }

    format!("Cases ({shown} of {total}) filtered: {}", parts.join(" | "))
}

fn status_line(state: &DashboardState) -> Line<'static> {
    let mut spans = Vec::new();

    if let Some(notice) = state.notice() {
        let style = styles::notice_style(notice.level);
        spans.push(Span::styled(format!("[{}] ", notice.level.as_label()), style));
        spans.push(Span::styled(notice.text.clone(), style));
        spans.push(Span::raw("  |  "));
    }

    let hints = if state.focus().is_editing() {
        "enter submit  esc cancel"
    } else {
        KEY_HINTS
    };
    spans.push(Span::styled(hints, styles::key_hint_style()));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use chrono::Local;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::notice::Notice;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn state(names: &[&str]) -> DashboardState {
        let mut team = TeamRegistry::default();
        for name in names {
            team.add(name).expect("fixture member");
            team.set_working(name, true).expect("fixture member");
        }
        DashboardState::new(team, AssignmentMode::RoundRobin, CaseStatus::Open)
    }

    fn case(case_id: &str, member: &str, status: CaseStatus) -> Case {
        Case {
            case_id: case_id.to_owned(),
            assigned_to: member.to_owned(),
            created_at: Local::now(),
            status,
        }
    }

    fn rendered_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("view should render");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn member_line_marks_working_and_rotation() {
        let text = line_text(&member_line("Alice", true, true));

        assert!(text.starts_with('\u{25CF}'));
        assert!(text.contains("Alice"));
        assert!(text.contains("next"));
    }

    #[test]
    fn member_line_marks_off_members() {
        let text = line_text(&member_line("Bob", false, false));

        assert!(text.starts_with('\u{25CB}'));
        assert!(!text.contains("next"));
    }

    #[test]
    fn team_title_counts_working_members() {
        let mut state = state(&["Alice", "Bob"]);
        state
            .team_mut()
            .set_working("Bob", false)
            .expect("Bob is a member");

        assert_eq!(team_title(state.team()), "Team (2, 1 working)");
    }

    #[test]
    fn assign_title_describes_manual_target() {
        let mut state = state(&["Alice", "Bob"]);
        state.set_assignment_mode(AssignmentMode::Manual);
        state.set_manual_status(CaseStatus::Closed);
        state.select_next();

        assert_eq!(assign_title(&state), "Assign case: Manual to Bob as Closed");
    }

    #[test]
    fn cases_title_lists_active_filters() {
        let filter = CaseFilter::new(["Alice"], [CaseStatus::Open]);

        assert_eq!(
            cases_title(1, 3, &filter),
            "Cases (1 of 3) filtered: Alice | Open"
        );
        assert_eq!(cases_title(3, 3, &CaseFilter::default()), "Cases (3)");
    }

    #[test]
    fn status_badge_wraps_label() {
        assert_eq!(status_badge(CaseStatus::InProgress).content, "[In Progress]");
    }

    #[test]
    fn status_line_shows_notice_before_hints() {
        let mut state = state(&["Alice"]);
        state.set_notice(Notice::warning("Alice is already in the team."));

        let text = line_text(&status_line(&state));

        assert!(text.starts_with("[WARN] Alice is already in the team."));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn status_line_shows_editing_hints_in_forms() {
        let mut state = state(&["Alice"]);
        state.set_focus(Focus::CaseInput);

        let text = line_text(&status_line(&state));

        assert_eq!(text, "enter submit  esc cancel");
    }

    #[test]
    fn renders_empty_dashboard() {
        let text = rendered_text(&state(&[]));

        assert!(text.contains("No team members"));
        assert!(text.contains("No cases assigned yet."));
        assert!(text.contains("No cases to chart yet."));
    }

    #[test]
    fn renders_team_cases_and_badges() {
        let mut state = state(&["Alice", "Bob"]);
        {
            let (_, store) = state.assignment_parts_mut();
            store.append(case("C-100", "Alice", CaseStatus::Open));
            store.append(case("C-200", "Bob", CaseStatus::Closed));
        }

        let text = rendered_text(&state);

        assert!(text.contains("Team (2, 2 working)"));
        assert!(text.contains("C-100"));
        assert!(text.contains("C-200"));
        assert!(text.contains("[Closed]"));
        assert!(text.contains("Workload (2 cases)"));
    }

    #[test]
    fn filtered_view_hides_other_cases() {
        let mut state = state(&["Alice", "Bob"]);
        {
            let (_, store) = state.assignment_parts_mut();
            store.append(case("C-100", "Alice", CaseStatus::Open));
            store.append(case("C-200", "Bob", CaseStatus::Closed));
        }
        state.filter_mut().toggle_status(CaseStatus::Closed);

        let text = rendered_text(&state);

        assert!(!text.contains("C-100"));
        assert!(text.contains("C-200"));
        assert!(text.contains("Workload (1 cases)"));
    }
}
