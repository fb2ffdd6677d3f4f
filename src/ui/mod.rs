mod input_box;
mod layout;
mod nav_bar;
mod status_bar;
mod theme;
pub mod views;

use crate::app::state::AppState;
use crate::router::ViewContext;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    nav_bar::render(frame, app_layout.nav_bar, state);
    render_active_view(frame, app_layout.view, state);
    input_box::render(frame, app_layout.input_box, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_active_view(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(active) = &state.active else {
        let text = if state.pending.is_some() {
            "Loading..."
        } else {
            ""
        };
        return placeholder(frame, area, text);
    };

    match state.router.view(active.name) {
        Some(view) => {
            let ctx = ViewContext {
                store: &state.store,
                params: &active.params,
                scroll: state.scroll_offset,
            };
            view.render(frame, area, &ctx);
        }
        None => placeholder(frame, area, "Loading..."),
    }
}

fn placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let paragraph = Paragraph::new(Line::styled(text, theme::Theme::hint()))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
