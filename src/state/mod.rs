/// State management module
///
/// This module owns all application state:
/// - Shared data structures (data.rs)
/// - The session-scoped stereo pair catalog (store.rs)
/// - The carousel cursor and readiness gate (navigator.rs)

pub mod data;
pub mod navigator;
pub mod store;
