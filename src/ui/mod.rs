//! Password strength meter controller.
//!
//! Holds the meter's state, turns user events into backend requests and
//! renders their results. Backend, preference storage and clipboard are
//! traits so the same controller drives the terminal front-end and tests.

pub mod backend;
pub mod clipboard;
pub mod controller;
pub mod events;
pub mod state;
pub mod store;
pub mod theme;
pub mod view;

pub use backend::HttpBackend;
pub use clipboard::SystemClipboard;
pub use controller::{Controller, ControllerOptions};
pub use events::UiEvent;
pub use state::UiState;
pub use store::{JsonFileStore, MemoryStore, PreferenceStore};
pub use theme::Theme;
