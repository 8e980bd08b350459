pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::display::{ConsoleDisplay, FileDisplay, MemoryDisplay};
pub use adapters::form::{MapForm, TomlForm};
pub use config::routes::RoutesConfig;
pub use core::{bridge::FormBridge, dispatch::Dispatcher};
pub use utils::error::{BridgeError, Result};
