//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::ascii::CharSet;
use crate::config::Config;
use crate::preview::PreviewOptions;

/// Live webcam preview in the terminal
#[derive(Parser, Debug)]
#[command(name = "campeek")]
#[command(version, about = "Live webcam preview in the terminal", long_about = None)]
#[command(after_help = "Press any key to quit the preview.

EXAMPLES:
    campeek                       # Preview the default camera
    campeek --camera 1 -w Desk    # Second camera, window titled \"Desk\"
    campeek --charset blocks      # Unicode block shading
    campeek list-cameras          # Show available devices")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera device index (from list-cameras) [default: 0]
    #[arg(long)]
    pub camera: Option<u32>,

    /// Title of the preview window [default: Video]
    #[arg(long, short)]
    pub window: Option<String>,

    /// ASCII character set [default: standard]
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Invert brightness (for light terminals)
    #[arg(long, overrides_with = "no_invert")]
    pub invert: bool,

    /// Don't invert brightness, even if the config file says to
    #[arg(long, overrides_with = "invert")]
    pub no_invert: bool,

    /// Draw in 24-bit color, even if the config file turns it off
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,

    /// Draw in the terminal's default color instead of 24-bit color
    #[arg(long, overrides_with = "color")]
    pub no_color: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Create default config file
    Init,
}

/// Effective settings after applying CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub preview: PreviewOptions,
    pub charset: CharSet,
    pub invert: bool,
    pub color: bool,
}

impl Args {
    /// Merge these flags over `config`. Flags win when given.
    pub fn settings(&self, config: &Config) -> Settings {
        Settings {
            preview: PreviewOptions {
                device_index: self.camera.unwrap_or(config.camera.device),
                window_name: self
                    .window
                    .clone()
                    .unwrap_or_else(|| config.window.title.clone()),
                read_retries: config.preview.read_retries,
                ..PreviewOptions::default()
            },
            charset: self.charset.map_or(config.window.charset, CharSet::from),
            invert: switch(self.invert, self.no_invert).unwrap_or(config.window.invert),
            color: switch(self.color, self.no_color).unwrap_or(config.window.color),
        }
    }
}

/// Value of an `--x` / `--no-x` flag pair, `None` if neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
