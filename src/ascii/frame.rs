//! Character-cell frames and the renderer that produces them.

use super::charset::CharSet;
use super::dimensions::calculate_dimensions;
use super::downsample::{CellColor, downsample_colors_into};
use super::mapping::map_to_chars_into;
use crate::camera::Frame;

/// A frame converted to a grid of characters.
///
/// `chars` and `colors` are row-major and both `width * height` long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsciiFrame {
    pub chars: Vec<char>,
    pub colors: Vec<CellColor>,
    pub width: u16,
    pub height: u16,
}

impl AsciiFrame {
    /// Iterate over rows as `(chars, colors)` slices.
    pub fn rows(&self) -> impl Iterator<Item = (&[char], &[CellColor])> {
        let width = (self.width as usize).max(1);
        self.chars.chunks(width).zip(self.colors.chunks(width))
    }

    /// The frame as plain text, rows joined by newlines.
    pub fn to_string_display(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }
        self.chars
            .chunks(self.width as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Converts camera frames to [`AsciiFrame`]s, reusing its buffers between
/// calls.
#[derive(Debug, Clone, Default)]
pub struct AsciiRenderer {
    /// Character ramp
    pub charset: CharSet,
    /// Invert brightness (for light terminals)
    pub invert: bool,
    frame: AsciiFrame,
}

impl AsciiRenderer {
    pub fn new(charset: CharSet, invert: bool) -> Self {
        Self {
            charset,
            invert,
            frame: AsciiFrame::default(),
        }
    }

    /// Convert `frame` to the largest undistorted grid that fits in
    /// `max_cols` x `max_rows`.
    pub fn render(&mut self, frame: &Frame, max_cols: u16, max_rows: u16) -> &AsciiFrame {
        let (cols, rows) = calculate_dimensions(frame.width, frame.height, max_cols, max_rows);
        let out = &mut self.frame;

        downsample_colors_into(frame, cols, rows, &mut out.colors);
        map_to_chars_into(
            out.colors.iter().map(CellColor::brightness),
            self.charset.chars(),
            self.invert,
            &mut out.chars,
        );
        // An empty frame leaves both buffers empty; report it as 0x0.
        if out.chars.is_empty() {
            out.width = 0;
            out.height = 0;
        } else {
            out.width = cols;
            out.height = rows;
        }
        out
    }
}
