//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod dispatcher;
pub mod mode;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use dispatcher::{Change, Dispatcher};
pub use mode::{Draft, DraftField, ModeController, SubmitOutcome, ViewMode};
pub use screens::{AddScreen, ListScreen};
pub use state::{NavigationAction, ScreenState};
pub use tui::{TermEvent, Tui};
