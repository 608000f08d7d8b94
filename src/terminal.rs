//! Terminal output: all crossterm I/O lives here.
//!
//! The game renders into a `FrameBuffer`; this module only translates that
//! buffer into terminal commands, packing two pixel rows into each
//! character cell with half-block glyphs.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use oled_arcade::display::{FrameBuffer, HEIGHT, WIDTH};
use oled_arcade::menu::GameKind;
use oled_arcade::ArcadeError;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PIXEL: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Panel rows plus top and bottom border.
const PANEL_ROWS: u16 = (HEIGHT / 2) as u16;
pub const NEED_COLS: u16 = WIDTH as u16 + 2;
pub const NEED_ROWS: u16 = PANEL_ROWS + 3;

pub fn check_size() -> Result<(), ArcadeError> {
    let (cols, rows) = terminal::size()?;
    if cols < NEED_COLS || rows < NEED_ROWS {
        return Err(ArcadeError::TerminalTooSmall {
            need_cols: NEED_COLS,
            need_rows: NEED_ROWS,
            cols,
            rows,
        });
    }
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Present one complete frame.
pub fn present<W: Write>(
    out: &mut W,
    frame: &FrameBuffer,
    game: Option<GameKind>,
) -> std::io::Result<()> {
    draw_border(out)?;

    out.queue(style::SetForegroundColor(C_PIXEL))?;
    for row in 0..PANEL_ROWS {
        let top = row as i32 * 2;
        let line: String = (0..WIDTH as i32)
            .map(|x| match (frame.pixel(x, top), frame.pixel(x, top + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            })
            .collect();
        out.queue(cursor::MoveTo(1, row + 1))?;
        out.queue(Print(line))?;
    }

    draw_controls_hint(out, game)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, NEED_ROWS))?;
    out.flush()?;
    Ok(())
}

pub fn clear<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.flush()
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(WIDTH))))?;

    out.queue(cursor::MoveTo(0, PANEL_ROWS + 1))?;
    out.queue(Print(format!("└{}┘", "─".repeat(WIDTH))))?;

    for row in 1..=PANEL_ROWS {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(NEED_COLS - 1, row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, game: Option<GameKind>) -> std::io::Result<()> {
    let hint = match game {
        None => "↑ ↓ : Choose   SPACE : Start   Q : Quit",
        Some(GameKind::Shooter) => {
            "↑ ↓ : Move   SPACE : Shoot   P : Pause / Restart   ESC : Menu   Q : Quit"
        }
        Some(GameKind::Snake) => {
            "Arrows : Steer   hold ↓ : Pause   hold ↑+→ : Exit   ESC : Menu   Q : Quit"
        }
        Some(GameKind::Jump) => "SPACE : Jump   ESC : Menu   Q : Quit",
        Some(GameKind::ButtonTest) => "1 2 3 4 : Buttons   ESC : Menu   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, PANEL_ROWS + 2))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
