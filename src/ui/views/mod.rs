//! Routed screens. Each type implements [`crate::router::View`] and is
//! constructed by its route's loader on first navigation.

pub mod history;
pub mod home;
pub mod info;
pub mod transcript;
