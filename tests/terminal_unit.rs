//! Rendering tests for the preview window, drawn into ratatui's TestBackend
//! so no real terminal is needed.

use campeek::ascii::{AsciiRenderer, CharSet};
use campeek::camera::Frame;
use campeek::preview::PreviewSurface;
use campeek::terminal::PreviewWindow;
use ratatui::backend::TestBackend;
use ratatui::style::Color;

fn solid(width: u32, height: u32, rgb: [u8; 3], sequence: u64) -> Frame {
    Frame::from_rgb(rgb.repeat((width * height) as usize), width, height, sequence).unwrap()
}

fn window(width: u16, height: u16, charset: CharSet, color: bool) -> PreviewWindow<TestBackend> {
    PreviewWindow::new(
        TestBackend::new(width, height),
        AsciiRenderer::new(charset, false),
        color,
    )
    .unwrap()
}

fn symbol(window: &PreviewWindow<TestBackend>, x: u16, y: u16) -> String {
    window.backend().buffer()[(x, y)].symbol().to_string()
}

fn row(window: &PreviewWindow<TestBackend>, y: u16) -> String {
    let buffer = window.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_title_shows_window_name() {
    let mut win = window(22, 8, CharSet::Standard, false);
    win.render("Video", &solid(4, 3, [255, 255, 255], 1)).unwrap();

    assert!(row(&win, 0).contains(" Video "), "top row: {:?}", row(&win, 0));
}

#[test]
fn test_frame_is_centered_inside_border() {
    // Inner area is 20x6; a 4:3 frame fits as 16x6, leaving 2 columns each side.
    let mut win = window(22, 8, CharSet::Standard, false);
    win.render("Video", &solid(4, 3, [255, 255, 255], 1)).unwrap();

    assert_eq!(symbol(&win, 0, 1), "│");
    assert_eq!(symbol(&win, 2, 1), " ");
    assert_eq!(symbol(&win, 3, 1), "@");
    assert_eq!(symbol(&win, 18, 6), "@");
    assert_eq!(symbol(&win, 19, 6), " ");
}

#[test]
fn test_dark_frame_draws_blank_cells() {
    let mut win = window(22, 8, CharSet::Standard, false);
    win.render("Video", &solid(4, 3, [0, 0, 0], 1)).unwrap();

    for y in 1..7 {
        assert_eq!(row(&win, y).trim_matches('│').trim(), "");
    }
}

#[test]
fn test_colored_cells_use_frame_color() {
    let mut win = window(22, 8, CharSet::Blocks, true);
    win.render("Video", &solid(4, 3, [255, 255, 255], 1)).unwrap();

    let cell = &win.backend().buffer()[(3, 1)];
    assert_eq!(cell.symbol(), "█");
    assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
}

#[test]
fn test_new_frame_replaces_previous() {
    let mut win = window(22, 8, CharSet::Standard, false);
    win.render("Video", &solid(4, 3, [255, 255, 255], 1)).unwrap();
    win.render("Video", &solid(4, 3, [0, 0, 0], 2)).unwrap();

    assert_eq!(symbol(&win, 3, 1), " ");
}

#[test]
fn test_renamed_window_updates_title() {
    let mut win = window(30, 8, CharSet::Standard, false);
    win.render("First", &solid(4, 3, [0, 0, 0], 1)).unwrap();
    win.render("Second", &solid(4, 3, [0, 0, 0], 2)).unwrap();

    let top = row(&win, 0);
    assert!(top.contains("Second"));
    assert!(!top.contains("First"));
}

#[test]
fn test_tiny_terminal_does_not_fail() {
    let mut win = window(2, 2, CharSet::Standard, true);
    win.render("Video", &solid(4, 3, [255, 255, 255], 1)).unwrap();
}
