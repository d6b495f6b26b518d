//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{case::CaseStatus, notice::NoticeLevel};

// =============================================================================
// Panels
// =============================================================================

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Team sidebar
// =============================================================================

/// Member available for manual assignment today.
pub fn working_member_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Member that is off today (dimmed).
pub fn off_member_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Marker for the member the next round-robin case goes to.
pub fn rotation_marker_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn selected_member_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

// =============================================================================
// Inputs
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Case table
// =============================================================================

pub fn table_header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn timestamp_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Colored badge for a case status.
pub fn status_badge_style(status: CaseStatus) -> Style {
    let color = match status {
        CaseStatus::Open => Color::Green,
        CaseStatus::InProgress => Color::Yellow,
        CaseStatus::Closed => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// =============================================================================
// Chart and status line
// =============================================================================

pub fn workload_bar_style() -> Style {
    Style::default().fg(Color::Blue)
}

pub fn workload_value_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

pub fn notice_style(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Success => Style::default().fg(Color::Green),
        NoticeLevel::Warning => Style::default().fg(Color::Yellow),
        NoticeLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn key_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
