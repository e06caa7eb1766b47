//! Downsampling camera frames to a grid of character cells.

use super::grayscale::luminance;
use crate::camera::Frame;

/// Average RGB color of one character cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    /// BT.601 luminance of this color.
    pub fn brightness(&self) -> u8 {
        luminance(self.r, self.g, self.b)
    }
}

/// Pixel span `[start, end)` covered by cell `i` of `cells` along an axis of
/// `pixels` pixels. Never empty, so grids finer than the image still sample
/// a pixel instead of going black.
fn cell_span(i: u16, cells: u16, pixels: u32) -> (u32, u32) {
    let size = pixels as f32 / cells as f32;
    let start = ((i as f32 * size) as u32).min(pixels - 1);
    let end = (((i + 1) as f32 * size) as u32).clamp(start + 1, pixels);
    (start, end)
}

/// Average a frame's colors over a `cols` x `rows` grid.
///
/// The buffer is cleared and refilled in row-major order so it can be reused
/// frame after frame. Returns the number of cells written (0 for an empty
/// frame or grid).
pub fn downsample_colors_into(
    frame: &Frame,
    cols: u16,
    rows: u16,
    buffer: &mut Vec<CellColor>,
) -> usize {
    buffer.clear();

    if cols == 0 || rows == 0 || frame.is_empty() {
        return 0;
    }

    let width = frame.width as usize;
    let bpp = Frame::BYTES_PER_PIXEL;
    buffer.reserve(cols as usize * rows as usize);

    for cy in 0..rows {
        let (y0, y1) = cell_span(cy, rows, frame.height);
        for cx in 0..cols {
            let (x0, x1) = cell_span(cx, cols, frame.width);

            let (mut r, mut g, mut b, mut count) = (0u64, 0u64, 0u64, 0u64);
            for py in y0..y1 {
                let row = py as usize * width;
                let start = (row + x0 as usize) * bpp;
                let end = (row + x1 as usize) * bpp;
                let Some(pixels) = frame.data.get(start..end) else {
                    continue;
                };
                for px in pixels.chunks_exact(bpp) {
                    r += px[0] as u64;
                    g += px[1] as u64;
                    b += px[2] as u64;
                    count += 1;
                }
            }

            buffer.push(if count > 0 {
                CellColor {
                    r: (r / count) as u8,
                    g: (g / count) as u8,
                    b: (b / count) as u8,
                }
            } else {
                CellColor::default()
            });
        }
    }

    buffer.len()
}
