use crate::app::action::Action;
use crate::app::commands::{self, ParsedCommand};
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::router::{NavError, View, ViewLoadError};
use crate::store::ChatMessage;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use tracing::{error, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::ViewReady { seq, name, result } => view_ready(state, seq, name, result),
        AppEvent::Tick => {
            // Redraw so the status clock stays current.
            state.dirty = true;
            vec![]
        }
    }
}

/// Resolve `path` and switch to its view, loading it first if this is the
/// first visit. Unregistered paths report in the status line and fall back
/// to the home view.
pub fn navigate(state: &mut AppState, path: &str) -> Vec<Action> {
    match state.router.resolve(path) {
        Ok(resolved) => {
            state.scroll_offset = 0;
            state.status_message = None;
            state.dirty = true;
            if state.router.is_loaded(resolved.name) {
                state.pending = None;
                state.active = Some(ActiveRoute {
                    name: resolved.name,
                    params: resolved.params,
                });
                vec![]
            } else {
                let seq = state.allocate_nav_seq();
                state.pending = Some(PendingNav {
                    seq,
                    name: resolved.name,
                    params: resolved.params,
                });
                vec![Action::LoadView {
                    seq,
                    name: resolved.name,
                }]
            }
        }
        Err(NavError::NotFound { path }) => {
            warn!(%path, "navigation to unregistered path");
            let actions = if path == "/" {
                vec![]
            } else {
                navigate(state, "/")
            };
            state.set_status(format!("No view at {}, returning home", path));
            actions
        }
    }
}

fn view_ready(
    state: &mut AppState,
    seq: u64,
    name: &'static str,
    result: Result<Box<dyn View>, ViewLoadError>,
) -> Vec<Action> {
    state.dirty = true;
    match result {
        Ok(view) => {
            state.router.install(name, view);
            if let Some(pending) = state.pending.take_if(|p| p.seq == seq) {
                state.active = Some(ActiveRoute {
                    name: pending.name,
                    params: pending.params,
                });
            }
        }
        Err(e) => {
            error!(name, error = %e, "view failed to load");
            state.set_status(format!("Failed to open {}: {}", name, e));
            if state.pending.as_ref().is_some_and(|p| p.seq == seq) {
                state.pending = None;
            }
        }
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_offset = state.scroll_offset.saturating_add(3),
        MouseEventKind::ScrollDown => state.scroll_offset = state.scroll_offset.saturating_sub(3),
        _ => {}
    }
    vec![]
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Tab => cycle_view(state, 1),
        KeyCode::BackTab => cycle_view(state, -1),
        KeyCode::Esc => navigate(state, "/"),
        KeyCode::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(5);
            vec![]
        }
        KeyCode::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(5);
            vec![]
        }
        KeyCode::Enter => submit_input(state),
        KeyCode::Up => {
            state.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.input.history_down();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Char(c) => {
            state.input.insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

/// Move to the next/previous static entry in route-table order.
fn cycle_view(state: &mut AppState, step: isize) -> Vec<Action> {
    let entries: Vec<_> = state
        .router
        .entries()
        .iter()
        .filter(|e| e.is_static())
        .collect();
    if entries.is_empty() {
        return vec![];
    }
    let len = entries.len() as isize;
    let current = state
        .active
        .as_ref()
        .and_then(|a| entries.iter().position(|e| e.name == a.name))
        .unwrap_or(0) as isize;
    let path = entries[(current + step).rem_euclid(len) as usize].path;
    navigate(state, path)
}

fn submit_input(state: &mut AppState) -> Vec<Action> {
    let text = state.input.take_text().trim().to_string();
    if text.is_empty() {
        return vec![];
    }

    if text.starts_with('/') {
        match commands::parse_command(&text) {
            Some(cmd) => dispatch_command(state, cmd),
            None => {
                state.set_status(format!("Unknown command: {}", text));
                vec![]
            }
        }
    } else {
        append_message(state, text);
        vec![]
    }
}

fn dispatch_command(state: &mut AppState, cmd: ParsedCommand) -> Vec<Action> {
    match cmd {
        ParsedCommand::Go { path } => navigate(state, &path),
        ParsedCommand::Clear => {
            match state.active_history() {
                Some(kind) => {
                    state.store.replace_history(kind, Vec::new());
                    state.set_status(format!("{} history cleared", kind.title()));
                }
                None => state.set_status("This view has no history to clear"),
            }
            vec![]
        }
        ParsedCommand::Help => {
            state.set_status("/go <path> | /clear | /quit | Tab cycles views, Esc goes home");
            vec![]
        }
        ParsedCommand::Quit => vec![Action::Quit],
    }
}

/// Append a user message to the active view's history as a whole-list
/// replacement, trimming the oldest records past the configured cap.
fn append_message(state: &mut AppState, text: String) {
    let Some(kind) = state.active_history() else {
        state.set_status("This view has no history; /go make-prompt to start one");
        return;
    };

    let mut messages = state.store.history(kind).to_vec();
    messages.push(ChatMessage::user(text));
    let max = state.config.ui.max_history;
    if max > 0 && messages.len() > max {
        let excess = messages.len() - max;
        messages.drain(..excess);
    }
    state.store.replace_history(kind, messages);
    state.scroll_offset = 0;
}
