//! Single-line input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::text_input_state::TextInputState;

use super::styles;

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

pub struct TextInputView<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub state: &'a TextInputState,
    pub focused: bool,
}

pub fn render_text_input(frame: &mut Frame<'_>, area: Rect, view: &TextInputView<'_>) {
    let border_style = if view.focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let paragraph = Paragraph::new(build_input_line(view)).block(
        Block::default()
            .title(view.title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if view.focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(view.state.cursor_position().min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn build_input_line(view: &TextInputView<'_>) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if !view.focused && view.state.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(view.placeholder.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(view.state.text().to_owned(), styles::input_text_style()),
        ])
    }
}
