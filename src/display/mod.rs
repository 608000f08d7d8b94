//! Rendering layer: everything that turns game state into pixels.
//!
//! Each renderer takes an immutable view of a game state and any
//! `DrawTarget` with binary colour.  No game logic is performed here, so
//! drawing the same state twice always produces the same frame.

pub mod jump;
pub mod menu;
pub mod shooter;
pub mod snake;

use core::convert::Infallible;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_5X7, FONT_7X13_BOLD},
        MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

pub const WIDTH: usize = crate::SCREEN_WIDTH as usize;
pub const HEIGHT: usize = crate::SCREEN_HEIGHT as usize;

// ── Frame buffer ──────────────────────────────────────────────────────────────

/// In-memory 128x32 monochrome frame, one bit per pixel.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Bit `x` of row `y` is pixel `(x, y)`.
    rows: [u128; HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self { rows: [0; HEIGHT] }
    }

    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if !(0..WIDTH as i32).contains(&x) || !(0..HEIGHT as i32).contains(&y) {
            return false;
        }
        self.rows[y as usize] & (1u128 << x) != 0
    }

    pub fn set(&mut self, x: i32, y: i32, on: bool) {
        if !(0..WIDTH as i32).contains(&x) || !(0..HEIGHT as i32).contains(&y) {
            return;
        }
        let bit = 1u128 << x;
        if on {
            self.rows[y as usize] |= bit;
        } else {
            self.rows[y as usize] &= !bit;
        }
    }

    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Any lit pixel inside the given rectangle (inclusive bounds).
    pub fn any_lit(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
        (y0..=y1).any(|y| (x0..=x1).any(|x| self.pixel(x, y)))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for y in 0..HEIGHT as i32 {
            let line: String = (0..WIDTH as i32)
                .map(|x| if self.pixel(x, y) { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

// ── Shared drawing helpers ────────────────────────────────────────────────────

pub(crate) fn stroke() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

pub(crate) fn fill() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_fill(BinaryColor::On)
}

/// Small text with its top-left corner at `(x, y)`.
pub(crate) fn text<D>(target: &mut D, s: &str, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_5X7, BinaryColor::On);
    Text::with_baseline(s, Point::new(x, y), style, Baseline::Top).draw(target)?;
    Ok(())
}

/// Large text sitting on the baseline at `y`.
pub(crate) fn headline<D>(target: &mut D, s: &str, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_7X13_BOLD, BinaryColor::On);
    Text::with_baseline(s, Point::new(x, y), style, Baseline::Alphabetic).draw(target)?;
    Ok(())
}

pub(crate) fn filled_rect<D>(
    target: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(fill())
        .draw(target)
}

/// "Game Over" headline with the restart hint below it.
pub(crate) fn game_over_banner<D>(
    target: &mut D,
    title_at: (i32, i32),
    hint_at: (i32, i32),
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    headline(target, "Game Over", title_at.0, title_at.1)?;
    text(target, "Restart it.. >", hint_at.0, hint_at.1)
}
