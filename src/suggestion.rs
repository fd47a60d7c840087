//! Suggestion module
//!
//! Maps a time-of-day label to a fixed meal suggestion. Input is normalized
//! (trimmed, lowercased) before it is looked up in the table.

mod normalize;
mod resolver;
mod table;

pub use normalize::normalize;
pub use resolver::resolve;
pub use table::{TimeOfDay, entries, lookup};
