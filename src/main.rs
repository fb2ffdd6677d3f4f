mod app;
mod config;
mod logging;
mod router;
mod store;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::{ActiveRoute, AppState};
use crate::router::Router;
use crate::store::{FileMedium, HistoryStore, MemoryMedium, StorageMedium};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    // Build the store and rehydrate exactly once, before the first render.
    let medium: Box<dyn StorageMedium> = if cfg.storage.persist {
        Box::new(FileMedium::new(cfg.storage.history_dir()))
    } else {
        Box::new(MemoryMedium::new())
    };
    let mut store = HistoryStore::new(medium);
    store.rehydrate();

    let router = Router::new(router::table::routes())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, store, router).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    store: HistoryStore,
    router: Router,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg, store, router);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (1s, keeps the status clock fresh)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial navigation to the home view
    let actions = handler::navigate(&mut state, "/");
    process_actions(&mut state, &event_tx, actions);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        process_actions(&mut state, &event_tx, actions);

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn process_actions(
    state: &mut AppState,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    actions: Vec<Action>,
) {
    for action in actions {
        match action {
            Action::LoadView { seq, name } => {
                if let Some(fut) = state.router.begin_load(name) {
                    // Drive the loader off the loop so a slow view cannot
                    // block other navigations.
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        let result = fut.await;
                        let _ = tx.send(AppEvent::ViewReady { seq, name, result });
                    });
                } else if let Some(pending) = state.pending.take_if(|p| p.seq == seq) {
                    // Cached since the navigation was handled; activate now.
                    state.active = Some(ActiveRoute {
                        name: pending.name,
                        params: pending.params,
                    });
                    state.dirty = true;
                }
            }
            Action::Quit => state.should_quit = true,
        }
    }
}
