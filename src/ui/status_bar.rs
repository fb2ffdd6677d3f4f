use crate::app::state::AppState;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    if !state.config.storage.persist {
        parts.push(Span::styled(
            " [ephemeral] ",
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    let clock = Local::now()
        .format(&state.config.ui.timestamp_format)
        .to_string();

    // Pad to fill remaining space, clock on the right
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(format!(" {} ", clock), Theme::status_clock()));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
