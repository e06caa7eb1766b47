//! Command-line interface definitions and helpers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, Settings};
pub use commands::{handle_config_action, list_cameras};
pub use enums::CharacterSet;
