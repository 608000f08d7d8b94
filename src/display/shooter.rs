use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, Rectangle, Triangle},
};

use super::{fill, filled_rect, game_over_banner, stroke, text};
use crate::entities::{
    Boss, Enemy, EnemyKind, GameState, GameStatus, BOSS_HEIGHT, BOSS_WIDTH, BOSS_X,
};

const HEALTH_BAR_X: i32 = 100;
const HEALTH_BAR_FILL: u32 = 22;

/// Render one complete shooter frame.
pub fn render<D>(state: &GameState, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    match state.status {
        GameStatus::GameOver => return game_over_banner(target, (26, 14), (32, 24)),
        GameStatus::Paused => {
            draw_top_bar(state, target)?;
            return text(target, "Game Paused", 36, 14);
        }
        GameStatus::Playing => {}
    }

    draw_top_bar(state, target)?;
    draw_plane(state.player.x, state.player.y, target)?;

    for (_, b) in state.bullets.iter() {
        Pixel(Point::new(b.x, b.y), BinaryColor::On).draw(target)?;
    }
    for (_, e) in state.enemies.iter() {
        draw_enemy(e, target)?;
    }
    for (_, eb) in state.enemy_bullets.iter() {
        text(target, "-", eb.x, eb.y)?;
    }
    if let Some(boss) = &state.boss {
        draw_boss(boss, target)?;
    }
    Ok(())
}

// ── HUD (rows 0..9) ───────────────────────────────────────────────────────────

fn draw_top_bar<D>(state: &GameState, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(Point::new(0, 9), Point::new(127, 9))
        .into_styled(stroke())
        .draw(target)?;

    for i in 0..state.player.lives as i32 {
        Circle::with_center(Point::new(2 + i * 6, 4), 5)
            .into_styled(fill())
            .draw(target)?;
    }

    text(target, &format!("S:{}", state.score), 44, 1)?;
    text(target, &format!("L:{}", state.stage), 70, 1)?;

    if let Some(boss) = &state.boss {
        Rectangle::new(Point::new(HEALTH_BAR_X, 1), Size::new(24, 5))
            .into_styled(stroke())
            .draw(target)?;
        let width = if boss.max_health == 0 {
            0
        } else {
            boss.health * HEALTH_BAR_FILL / boss.max_health
        };
        if width > 0 {
            filled_rect(target, HEALTH_BAR_X + 1, 2, width, 3)?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_plane<D>(x: i32, y: i32, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    //  .#..
    //  ####
    //  .#..
    Pixel(Point::new(x, y + 1), BinaryColor::On).draw(target)?;
    Line::new(Point::new(x + 1, y), Point::new(x + 1, y + 2))
        .into_styled(stroke())
        .draw(target)?;
    Line::new(Point::new(x + 2, y + 1), Point::new(x + 3, y + 1))
        .into_styled(stroke())
        .draw(target)
}

fn draw_enemy<D>(e: &Enemy, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let (x, y) = (e.x, e.y);
    match e.kind {
        EnemyKind::Orb => Circle::with_center(Point::new(x + 2, y + 2), 5)
            .into_styled(stroke())
            .draw(target),
        EnemyKind::Cross => {
            Line::new(Point::new(x, y), Point::new(x + 3, y + 3))
                .into_styled(stroke())
                .draw(target)?;
            Line::new(Point::new(x + 3, y), Point::new(x, y + 3))
                .into_styled(stroke())
                .draw(target)
        }
        EnemyKind::Spike => Triangle::new(
            Point::new(x, y + 4),
            Point::new(x + 2, y),
            Point::new(x + 4, y + 4),
        )
        .into_styled(fill())
        .draw(target),
        EnemyKind::Box => Rectangle::new(Point::new(x, y), Size::new(4, 4))
            .into_styled(stroke())
            .draw(target),
        EnemyKind::Block => filled_rect(target, x, y, 4, 4),
    }
}

fn draw_boss<D>(boss: &Boss, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let top_left = Point::new(BOSS_X, boss.y);
    let bottom_right = Point::new(BOSS_X + BOSS_WIDTH, boss.y + BOSS_HEIGHT);
    Rectangle::new(top_left, Size::new(BOSS_WIDTH as u32, BOSS_HEIGHT as u32))
        .into_styled(stroke())
        .draw(target)?;
    Line::new(top_left, bottom_right)
        .into_styled(stroke())
        .draw(target)?;
    Line::new(
        Point::new(bottom_right.x, top_left.y),
        Point::new(top_left.x, bottom_right.y),
    )
    .into_styled(stroke())
    .draw(target)
}
