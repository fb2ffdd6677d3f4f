use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Tabs;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    // Pattern routes (e.g. /history/:kind) have no tab of their own.
    let entries: Vec<_> = state
        .router
        .entries()
        .iter()
        .filter(|e| e.is_static())
        .collect();

    let titles: Vec<Line> = entries
        .iter()
        .map(|e| Line::from(format!(" {} ", e.name)))
        .collect();

    let selected: Option<usize> = state
        .active
        .as_ref()
        .and_then(|a| entries.iter().position(|e| e.name == a.name));

    let tabs = Tabs::new(titles)
        .style(Theme::nav_inactive())
        .highlight_style(Theme::nav_active())
        .divider("|")
        .select(selected);
    frame.render_widget(tabs, area);
}
