// Library crate for flimmer-challenge - exposes modules for testing
pub mod flow;
pub mod models;
pub mod settings;
pub mod ui;
pub mod util;

use crate::settings::Settings;
use std::sync::OnceLock;

/// Settings loaded from `~/.flimmer-challenge/settings.toml`.
pub static SETTINGS: OnceLock<Settings> = OnceLock::new();
