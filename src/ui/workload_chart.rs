//! Bar chart of cases per member for the current filtered view.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::case_store::WorkloadSummary;

use super::styles;

const MIN_BAR_WIDTH: u16 = 3;
const MAX_BAR_WIDTH: u16 = 12;
const BAR_GAP: u16 = 2;

pub fn render_workload_chart(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: &WorkloadSummary,
    border_style: Style,
) {
    let block = Block::default()
        .title(format!("Workload ({} cases)", summary.total()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if summary.is_empty() {
        frame.render_widget(Paragraph::new("No cases to chart yet.").block(block), area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let bar_width = bar_width_for(inner_width, summary.entries().len());
    let bars = build_bars(summary, bar_width as usize);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .bar_style(styles::workload_bar_style())
        .value_style(styles::workload_value_style())
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Widest bar that still fits every member, clamped to a readable range.
fn bar_width_for(inner_width: u16, bar_count: usize) -> u16 {
    let count = u16::try_from(bar_count.max(1)).unwrap_or(u16::MAX);
    let gaps = BAR_GAP.saturating_mul(count.saturating_sub(1));
    let width = inner_width.saturating_sub(gaps) / count;
    width.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

fn build_bars(summary: &WorkloadSummary, label_width: usize) -> Vec<Bar<'static>> {
    summary
        .entries()
        .iter()
        .map(|entry| {
            Bar::default()
                .value(entry.count as u64)
                .label(Line::from(truncate_to_width(&entry.member, label_width)))
        })
        .collect()
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }
    if width == 0 {
        return String::new();
    }

    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}
