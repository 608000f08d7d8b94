//! Tiny arcade games for a 128x32 monochrome panel with four buttons.
//!
//! All game logic is pure: every game exposes a state value and a `tick`
//! that takes the current input and a millisecond timestamp and returns the
//! next state.  Rendering goes through `embedded-graphics`, so the same code
//! draws into the in-memory [`display::FrameBuffer`] used by the terminal
//! front end and the tests.

pub mod app;
pub mod clock;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod event;
pub mod input;
pub mod jump;
pub mod logging;
pub mod menu;
pub mod pool;
pub mod scores;
pub mod snake;

/// Panel width in pixels.
pub const SCREEN_WIDTH: i32 = 128;
/// Panel height in pixels.
pub const SCREEN_HEIGHT: i32 = 32;

pub use error::ArcadeError;

/// `true` once more than `period` ms have passed since `last`.
/// A timer that never fired is always ready.
pub(crate) fn timer_elapsed(last: Option<u64>, now: u64, period: u64) -> bool {
    last.map_or(true, |t| now.saturating_sub(t) > period)
}
