use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Line};

use super::{filled_rect, game_over_banner, stroke, text};
use crate::jump::{
    JumpState, JumpStatus, OBSTACLE_H, OBSTACLE_W, OBSTACLE_Y, PLAYER_H, PLAYER_W, PLAYER_X,
};

pub fn render<D>(state: &JumpState, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    if let JumpStatus::Crashed { .. } = state.status {
        return game_over_banner(target, (25, 14), (34, 24));
    }

    Line::new(Point::new(0, 30), Point::new(128, 30))
        .into_styled(stroke())
        .draw(target)?;
    filled_rect(target, PLAYER_X, state.player_y, PLAYER_W as u32, PLAYER_H as u32)?;
    filled_rect(
        target,
        state.obstacle_x,
        OBSTACLE_Y,
        OBSTACLE_W as u32,
        OBSTACLE_H as u32,
    )?;
    text(target, &format!("S-{}", state.score), 0, 0)
}
