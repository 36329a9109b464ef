/// Presents a character grid to the terminal
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use glyph3d_core::{Attr, CharGrid};
use std::io::Write;

/// Console colour table indexed by attribute nibble
const CONSOLE_COLORS: [Color; 16] = [
    Color::Black,
    Color::DarkBlue,
    Color::DarkGreen,
    Color::DarkCyan,
    Color::DarkRed,
    Color::DarkMagenta,
    Color::DarkYellow,
    Color::Grey,
    Color::DarkGrey,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::Magenta,
    Color::Yellow,
    Color::White,
];

pub fn console_color(nibble: u8) -> Color {
    CONSOLE_COLORS[(nibble & 0x0F) as usize]
}

/// Writes a `CharGrid` row by row, emitting colour commands only when the
/// attribute changes between consecutive cells.
#[derive(Debug, Default)]
pub struct GridPresenter {
    current: Option<Attr>,
}

impl GridPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw<W: Write>(&mut self, grid: &CharGrid, writer: &mut W) -> std::io::Result<()> {
        // the terminal may have been reset since the last frame
        self.current = None;
        for (y, row) in grid.rows().enumerate() {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for cell in row {
                if self.current != Some(cell.color) {
                    writer.queue(SetForegroundColor(console_color(cell.color.foreground())))?;
                    writer.queue(SetBackgroundColor(console_color(cell.color.background())))?;
                    self.current = Some(cell.color);
                }
                writer.queue(Print(cell.glyph))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
