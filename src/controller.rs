//! Presentation controller
//!
//! Owns the screen's UI state and implements the Suggest and Reset actions.
//! Nothing here depends on the terminal, so the state machine can be driven
//! directly from tests.

mod notice;
mod presentation;
mod ui_state;

pub use notice::{Notice, NoticeLength, Severity};
pub use presentation::PresentationController;
pub use ui_state::{Phase, UiState};
