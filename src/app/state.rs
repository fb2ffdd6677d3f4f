use crate::config::AppConfig;
use crate::router::{RouteParams, Router};
use crate::store::{HistoryKind, HistoryStore};

/// The view currently on screen, with the parameters forwarded to it.
#[derive(Debug, Clone)]
pub struct ActiveRoute {
    pub name: &'static str,
    pub params: RouteParams,
}

/// A navigation waiting for its view to finish loading.
#[derive(Debug, Clone)]
pub struct PendingNav {
    pub seq: u64,
    pub name: &'static str,
    pub params: RouteParams,
}

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Clear the line and return its contents, recording non-empty lines in
    /// the recall history.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.history_index = None;
        if !text.is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub store: HistoryStore,
    pub router: Router,
    pub active: Option<ActiveRoute>,
    pub pending: Option<PendingNav>,
    pub input: InputState,
    pub scroll_offset: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
    next_nav_seq: u64,
}

impl AppState {
    pub fn new(config: AppConfig, store: HistoryStore, router: Router) -> Self {
        Self {
            config,
            store,
            router,
            active: None,
            pending: None,
            input: InputState::new(),
            scroll_offset: 0,
            status_message: None,
            should_quit: false,
            dirty: true,
            next_nav_seq: 0,
        }
    }

    pub fn allocate_nav_seq(&mut self) -> u64 {
        let seq = self.next_nav_seq;
        self.next_nav_seq += 1;
        seq
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(text.into());
        self.dirty = true;
    }

    /// History list backing the active view, if it has one.
    pub fn active_history(&self) -> Option<HistoryKind> {
        self.active
            .as_ref()
            .and_then(|a| history_for_route(a.name))
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let counts: Vec<String> = HistoryKind::ALL
            .iter()
            .map(|&kind| format!("{}: {}", kind.title(), self.store.history(kind).len()))
            .collect();
        counts.join(" | ")
    }
}

/// Which history list a route renders and appends to.
fn history_for_route(name: &str) -> Option<HistoryKind> {
    match name {
        "make-prompt" => Some(HistoryKind::MakePrompt),
        "ai-answer" => Some(HistoryKind::AiAnswer),
        "ai-talk" => Some(HistoryKind::AiTalk),
        _ => None,
    }
}
