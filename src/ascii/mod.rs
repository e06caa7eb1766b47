//! Conversion of camera frames to colored character grids.
//!
//! 1. **Downsampling** - average RGB per character cell
//! 2. **Luminance** - BT.601 brightness of each cell
//! 3. **Character mapping** - brightness to a character ramp ([`CharSet`])
//!
//! Grid size is chosen by [`calculate_dimensions`] so the image keeps its
//! aspect ratio on screen.

mod charset;
mod dimensions;
mod downsample;
mod frame;
mod grayscale;
mod mapping;

pub use charset::{BLOCKS_CHARSET, CharSet, MINIMAL_CHARSET, STANDARD_CHARSET};
pub use dimensions::{
    DEFAULT_CHAR_ASPECT_RATIO, calculate_dimensions, calculate_dimensions_with_aspect,
};
pub use downsample::{CellColor, downsample_colors_into};
pub use frame::{AsciiFrame, AsciiRenderer};
pub use grayscale::luminance;
pub use mapping::{map_to_char, map_to_chars_into};
