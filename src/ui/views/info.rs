use crate::router::{View, ViewContext};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Static informational screen for views whose backends live outside this
/// application.
pub struct InfoView {
    title: &'static str,
    lines: &'static [&'static str],
}

impl InfoView {
    pub fn chatgpt() -> Self {
        Self {
            title: " ChatGPT ",
            lines: &[
                "This screen fronts a hosted chat backend.",
                "",
                "Conversations here are sent to the configured service and",
                "are not stored locally. Use /ai-talk for a conversation",
                "that is persisted across restarts.",
            ],
        }
    }

    pub fn ai_rag() -> Self {
        Self {
            title: " AI RAG ",
            lines: &[
                "Retrieval-augmented answering over your own documents.",
                "",
                "Answers are grounded in an external document index and",
                "are not stored locally. Use /ai-answer for persisted",
                "question threads.",
            ],
        }
    }
}

impl View for InfoView {
    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &ViewContext<'_>) {
        let block = Block::default()
            .title(self.title)
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = self.lines.iter().map(|l| Line::raw(*l)).collect();
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}
