//! Terminal rendering adapter
//!
//! Translates the current `GameState` into queued crossterm commands,
//! scaling the virtual screen onto whatever terminal grid is available.
//! No game logic is performed here; this module only draws.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::rect::Rect;
use crate::sim::state::{GamePhase, GameState};

// Palette
const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_HUD: Color = Color::Yellow;
const C_LIVES: Color = Color::Red;
const C_BUTTON_BG: Color = Color::Green;
const C_BUTTON_TEXT: Color = Color::Black;
const C_BANNER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Maps virtual-screen coordinates onto the terminal grid.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn new(size: (u16, u16)) -> Self {
        Self {
            cols: size.0.max(1),
            rows: size.1.max(1),
        }
    }

    fn col(&self, x: i32) -> u16 {
        let c = x * self.cols as i32 / SCREEN_WIDTH;
        c.clamp(0, self.cols as i32 - 1) as u16
    }

    fn row(&self, y: i32) -> u16 {
        let r = y * self.rows as i32 / SCREEN_HEIGHT;
        r.clamp(0, self.rows as i32 - 1) as u16
    }
}

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    term_size: (u16, u16),
) -> std::io::Result<()> {
    let vp = Viewport::new(term_size);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for alien in &state.aliens {
        fill_rect(out, vp, &alien.rect(), '▓', C_ALIEN)?;
    }
    for bullet in &state.bullets {
        fill_rect(out, vp, &bullet.rect(), '│', C_BULLET)?;
    }
    fill_rect(out, vp, &state.ship.rect(), '█', C_SHIP)?;

    draw_hud(out, vp, state)?;

    if state.phase == GamePhase::Inactive {
        draw_play_prompt(out, vp, state)?;
    }

    // Park the cursor and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Fill a virtual-space rect with one glyph, covering at least one cell.
fn fill_rect<W: Write>(
    out: &mut W,
    vp: Viewport,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let x0 = vp.col(rect.left());
    let x1 = vp.col(rect.right() - 1);
    let y0 = vp.row(rect.top());
    let y1 = vp.row(rect.bottom() - 1);

    let width = (x1.saturating_sub(x0) as usize) + 1;
    let line: String = std::iter::repeat(glyph).take(width).collect();

    out.queue(style::SetForegroundColor(color))?;
    for row in y0..=y1 {
        out.queue(cursor::MoveTo(x0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, vp: Viewport, state: &GameState) -> std::io::Result<()> {
    // Remaining ships, left
    let hearts: String = "♥".repeat(state.stats.ships_left as usize);
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_LIVES))?;
    out.queue(Print(format!("Ships {hearts}")))?;

    // High score, centered
    print_centered(out, vp, 0, &format!("HIGH {}", state.stats.high_score), C_HUD)?;

    // Score and level, right
    let right_text = format!("SCORE {:>6}  LV {}", state.stats.score, state.stats.level);
    let col = vp.cols.saturating_sub(right_text.chars().count() as u16);
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(&right_text))?;

    Ok(())
}

/// The inactive-phase overlay: game-over banner, play button, key hints.
fn draw_play_prompt<W: Write>(out: &mut W, vp: Viewport, state: &GameState) -> std::io::Result<()> {
    let button_row = vp.row(state.play_button.y + state.play_button.h / 2);

    // A nonzero tick counter means a round has already been played out
    if state.time_ticks > 0 {
        print_centered(
            out,
            vp,
            button_row.saturating_sub(2),
            "G A M E  O V E R",
            C_BANNER,
        )?;
    }

    let label = "  P L A Y  ";
    let col = (vp.cols / 2).saturating_sub(label.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, button_row))?;
    out.queue(style::SetBackgroundColor(C_BUTTON_BG))?;
    out.queue(style::SetForegroundColor(C_BUTTON_TEXT))?;
    out.queue(Print(label))?;
    out.queue(style::ResetColor)?;

    print_centered(
        out,
        vp,
        (button_row + 2).min(vp.rows.saturating_sub(1)),
        "p or click to play · arrows move · space fires · q quits",
        C_HINT,
    )?;
    Ok(())
}

fn print_centered<W: Write>(
    out: &mut W,
    vp: Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (vp.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row.min(vp.rows.saturating_sub(1))))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
