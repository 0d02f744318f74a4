//! Bar chart rendering for the array under sort

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Render the dataset as one vertical bar per value.
///
/// The chart is pinned to `max` so bar heights stay put while values move
/// around. `selected` is the most recently touched index; its bar renders
/// in the alert color, everything else in the regular bar color.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[u32],
    max: u32,
    selected: Option<usize>,
    title: &str,
) {
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = if selected == Some(i) {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(u64::from(value))
                .style(Style::default().fg(color))
                .text_value(String::new())
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border))
                .title(title.to_string()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .max(u64::from(max.max(1)));

    frame.render_widget(chart, area);
}
