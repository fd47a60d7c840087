//! Notification module for mealpick
//!
//! Displays transient messages (errors and confirmations) in the top-right
//! corner. A notification disappears on its own once its duration elapses.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState};
