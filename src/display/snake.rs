use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use super::{filled_rect, game_over_banner, stroke, text};
use crate::snake::{SnakeState, SnakeStatus, BLOCK_SIZE, ORIGIN_X, ORIGIN_Y, SCORE_BOX_WIDTH};

pub fn render<D>(state: &SnakeState, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    draw_frame(state, target)?;

    match state.status {
        SnakeStatus::Crashed { .. } => game_over_banner(target, (26, 14), (36, 22)),
        status => {
            for &(gx, gy) in &state.body {
                draw_block(gx, gy, target)?;
            }
            draw_block(state.food.0, state.food.1, target)?;
            if status == SnakeStatus::Paused {
                text(target, "Paused...", 45, 10)?;
            }
            Ok(())
        }
    }
}

fn draw_frame<D>(state: &SnakeState, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = target.bounding_box().size;
    Rectangle::new(Point::zero(), size)
        .into_styled(stroke())
        .draw(target)?;
    Rectangle::new(Point::zero(), Size::new(SCORE_BOX_WIDTH as u32, size.height))
        .into_styled(stroke())
        .draw(target)?;
    text(target, "S", 6, 6)?;
    text(target, &state.score().to_string(), 6, 18)
}

fn draw_block<D>(gx: i32, gy: i32, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    filled_rect(
        target,
        ORIGIN_X + gx * BLOCK_SIZE,
        ORIGIN_Y + gy * BLOCK_SIZE,
        BLOCK_SIZE as u32,
        BLOCK_SIZE as u32,
    )
}
