use crate::router::{View, ViewContext};
use crate::store::{HistoryKind, Role};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Chat transcript over one history list. Shared by the make-prompt,
/// ai-answer, and ai-talk routes.
pub struct TranscriptView {
    kind: HistoryKind,
}

impl TranscriptView {
    pub fn new(kind: HistoryKind) -> Self {
        Self { kind }
    }
}

impl View for TranscriptView {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>) {
        let block = Block::default()
            .title(format!(" {} ", self.kind.title()))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let messages = ctx.store.history(self.kind);
        if messages.is_empty() {
            let hint = Paragraph::new(Line::styled(
                "No messages yet. Type below and press Enter.",
                Theme::hint(),
            ));
            frame.render_widget(hint, inner);
            return;
        }

        let lines: Vec<Line> = messages
            .iter()
            .map(|msg| {
                let (prefix, style) = match msg.role {
                    Role::User => ("<you> ", Theme::role_user()),
                    Role::Assistant => (" <ai> ", Theme::role_assistant()),
                };
                Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(msg.text.as_str(), Theme::message_text()),
                ])
            })
            .collect();

        // Anchor to the bottom, then scroll up by the offset.
        let height = inner.height as usize;
        let top = lines.len().saturating_sub(height + ctx.scroll);
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((top as u16, 0));
        frame.render_widget(paragraph, inner);
    }
}
