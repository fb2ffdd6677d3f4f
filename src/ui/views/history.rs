use crate::router::{View, ViewContext};
use crate::store::{ChatMessage, HistoryKind, Role};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Overview of the saved history lists. Without parameters it summarizes
/// every list; a `kind` route parameter (e.g. `/history/ai-talk`) narrows it
/// to one list with a deeper tail.
pub struct HistoryOverview;

impl HistoryOverview {
    pub fn new() -> Self {
        Self
    }
}

impl View for HistoryOverview {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>) {
        let filter = ctx
            .params
            .get("kind")
            .and_then(|slug| HistoryKind::from_slug(slug));

        let title = match filter {
            Some(kind) => format!(" History: {} ", kind.title()),
            None => " History ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        let (kinds, tail): (&[HistoryKind], usize) = match filter {
            Some(ref kind) => (std::slice::from_ref(kind), 20),
            None => (&HistoryKind::ALL, 1),
        };

        for &kind in kinds {
            let list = ctx.store.history(kind);
            lines.push(Line::from(vec![
                Span::styled(kind.title(), Theme::title()),
                Span::styled(format!("  {} messages", list.len()), Theme::message_text()),
            ]));
            if list.is_empty() {
                lines.push(Line::styled("  empty", Theme::hint()));
            } else {
                let start = list.len().saturating_sub(tail);
                for msg in &list[start..] {
                    lines.push(preview_line(msg));
                }
            }
            lines.push(Line::raw(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn preview_line(msg: &ChatMessage) -> Line<'_> {
    let style = match msg.role {
        Role::User => Theme::role_user(),
        Role::Assistant => Theme::role_assistant(),
    };
    let mut preview: String = msg.text.chars().take(72).collect();
    if preview.len() < msg.text.len() {
        preview.push('…');
    }
    Line::from(vec![
        Span::styled("  • ", style),
        Span::styled(preview, Theme::hint()),
    ])
}
