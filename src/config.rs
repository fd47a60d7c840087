//! Configuration loading
//!
//! Reads `~/.config/mealpick/config.toml`. A missing file yields the
//! defaults; an unreadable or invalid file yields the defaults plus a
//! warning that is shown to the user at startup.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path};
pub use types::{Config, NotificationConfig};
