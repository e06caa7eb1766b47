//! campeek library crate.
//!
//! Exposes the preview loop and its camera/terminal implementations for the
//! binary and for integration tests.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod preview;
pub mod terminal;
