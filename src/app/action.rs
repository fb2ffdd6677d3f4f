/// Side effects the main loop performs on the handler's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Spawn the loader for a not-yet-cached view.
    LoadView { seq: u64, name: &'static str },
    Quit,
}
