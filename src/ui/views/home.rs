use crate::router::{View, ViewContext};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }
}

impl View for HomeView {
    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &ViewContext<'_>) {
        let block = Block::default()
            .title(" Home ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::styled("Welcome to promptdeck!", Theme::title()),
            Line::raw(""),
            Line::raw("Views:"),
            Line::raw("  /make-prompt   build and refine prompts"),
            Line::raw("  /ai-answer     one-shot question threads"),
            Line::raw("  /ai-talk       free-form conversation"),
            Line::raw("  /chatgpt       hosted chat session"),
            Line::raw("  /ai-rag        retrieval-augmented answering"),
            Line::raw("  /history       everything you have saved"),
            Line::raw(""),
            Line::raw("Switch views:   /go <path>  or press Tab"),
            Line::raw("Clear a view:   /clear"),
            Line::raw("Help:           /help"),
            Line::raw("Quit:           Ctrl+C or /quit"),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
