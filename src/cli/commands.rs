//! Subcommand handlers for list-cameras and config actions.

use std::path::Path;

use super::args::{ConfigAction, Settings};
use crate::camera::{self, CameraError};
use crate::config::{Config, ConfigError, default_path};

/// List available cameras and print them to stdout.
pub fn list_cameras() -> Result<(), CameraError> {
    let devices = camera::list_devices()?;

    if devices.is_empty() {
        println!("No cameras found.");
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
    } else {
        println!("Available cameras:");
        for device in devices {
            println!("  {}", device);
        }
        println!();
        println!("Use --camera <index> to select a camera.");
    }
    Ok(())
}

/// Handle config subcommand actions.
///
/// `path` is the `--config` override, if any; `settings` are the effective
/// settings shown by `config show`.
pub fn handle_config_action(
    action: ConfigAction,
    path: Option<&Path>,
    settings: &Settings,
) -> Result<(), ConfigError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Camera: {}", settings.preview.device_index);
            println!("  Window: {}", settings.preview.window_name);
            println!("  Charset: {}", settings.charset.name());
            println!("  Invert: {}", yes_no(settings.invert));
            println!("  Color: {}", yes_no(settings.color));
            println!("  Read retries: {}", settings.preview.read_retries);
            println!();

            let state = if config_path.exists() { "exists" } else { "not found" };
            println!("Config file: {} ({})", config_path.display(), state);
        }
        ConfigAction::Init => {
            Config::write_default(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
