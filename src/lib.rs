//! mealpick: meal suggestions by time of day, in the terminal.
//!
//! The suggestion logic ([`suggestion`]) and the screen state machine
//! ([`controller`]) are independent of the terminal; the remaining modules
//! bind them to ratatui widgets and crossterm key events.

pub mod app;
pub mod buttons;
pub mod config;
pub mod controller;
pub mod error;
pub mod help;
pub mod input;
pub mod logging;
pub mod notification;
pub mod output;
pub mod suggestion;
pub mod widgets;

#[cfg(test)]
mod test_utils;
