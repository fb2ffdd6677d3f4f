use crate::router::{View, ViewLoadError};
use crossterm::event::Event as CrosstermEvent;

pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A lazily-loaded view finished loading (or failed). `seq` ties the
    /// completion to the navigation that requested it, so a stale load
    /// cannot clobber a newer navigation.
    ViewReady {
        seq: u64,
        name: &'static str,
        result: Result<Box<dyn View>, ViewLoadError>,
    },

    /// Periodic refresh for the status clock
    Tick,
}
