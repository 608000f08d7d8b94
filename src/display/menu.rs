use embedded_graphics::{
    mono_font::{ascii::FONT_4X6, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use super::text;
use crate::input::Panel;
use crate::menu::{GameKind, Menu};
use crate::scores::HighScores;

const ROW_HEIGHT: i32 = 8;

/// One game per row, cursor on the left, best result of the highlighted
/// game on the right.
pub fn render<D>(menu: &Menu, scores: &HighScores, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    for (row, game) in GameKind::ALL.iter().enumerate() {
        let y = row as i32 * ROW_HEIGHT;
        if row == menu.selected {
            text(target, ">", 2, y)?;
        }
        text(target, game.label(), 10, y)?;
    }

    if let Some(best) = scores.best(menu.current()) {
        let tag = match menu.current() {
            GameKind::Shooter => format!("Best L:{best}"),
            _ => format!("Best {best}"),
        };
        text(target, &tag, 80, 12)?;
    }
    if menu.current() == GameKind::Shooter {
        text(target, &format!("S:{}", scores.shooter_score), 80, 20)?;
    }
    Ok(())
}

/// Which panel buttons are down right now.
pub fn render_button_test<D>(panel: &Panel, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let style = MonoTextStyle::new(&FONT_4X6, BinaryColor::On);
    let mut lines = vec!["Button Test:".to_string()];
    lines.extend(
        (0..4)
            .filter(|&i| panel.pressed(i))
            .map(|i| format!("BTN {} Pressed", i + 1)),
    );
    for (row, line) in lines.iter().enumerate() {
        Text::with_baseline(line, Point::new(0, row as i32 * 6), style, Baseline::Top)
            .draw(target)?;
    }
    Ok(())
}
