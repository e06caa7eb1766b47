//! The preview window: a titled, bordered pane that shows the latest frame.

use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use std::io::{self, Stdout};

use crate::ascii::{AsciiFrame, AsciiRenderer, CellColor};
use crate::camera::Frame;
use crate::preview::PreviewSurface;

/// Display surface backed by a ratatui terminal.
///
/// Each render replaces the whole screen, so only the latest frame is ever
/// visible.
pub struct PreviewWindow<B: Backend> {
    terminal: Terminal<B>,
    renderer: AsciiRenderer,
    /// Draw cells in 24-bit color instead of the default foreground
    color: bool,
}

impl PreviewWindow<CrosstermBackend<Stdout>> {
    /// Preview window drawing to stdout.
    ///
    /// The caller is expected to hold a [`super::TerminalGuard`].
    pub fn stdout(renderer: AsciiRenderer, color: bool) -> io::Result<Self> {
        Self::new(CrosstermBackend::new(io::stdout()), renderer, color)
    }
}

impl<B: Backend> PreviewWindow<B> {
    pub fn new(backend: B, renderer: AsciiRenderer, color: bool) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            renderer,
            color,
        })
    }

    /// The underlying backend (used by tests to inspect the drawn buffer).
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> PreviewSurface for PreviewWindow<B> {
    fn render(&mut self, window: &str, frame: &Frame) -> io::Result<()> {
        let Self {
            terminal,
            renderer,
            color,
        } = self;

        terminal.draw(|f| {
            let area = f.area();
            let block = Block::bordered()
                .title(format!(" {} ", window))
                .border_style(Style::default().fg(Color::DarkGray));
            let inner = block.inner(area);
            f.render_widget(block, area);

            let ascii = renderer.render(frame, inner.width, inner.height);
            let target = centered(inner, ascii.width, ascii.height);
            f.render_widget(Paragraph::new(to_lines(ascii, *color)), target);
        })?;

        Ok(())
    }
}

/// A `width` x `height` rect centered in `area` (clamped to it).
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn to_lines(frame: &AsciiFrame, color: bool) -> Vec<Line<'static>> {
    frame
        .rows()
        .map(|(chars, colors)| {
            if color {
                Line::from(
                    chars
                        .iter()
                        .zip(colors)
                        .map(|(&c, cell)| colored_span(c, cell))
                        .collect::<Vec<_>>(),
                )
            } else {
                Line::from(chars.iter().collect::<String>())
            }
        })
        .collect()
}

fn colored_span(c: char, cell: &CellColor) -> Span<'static> {
    Span::styled(
        c.to_string(),
        Style::default().fg(Color::Rgb(cell.r, cell.g, cell.b)),
    )
}
