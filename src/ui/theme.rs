use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn nav_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn nav_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn role_user() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn role_assistant() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn message_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn prompt() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_clock() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
