use oled_arcade::app::{App, Screen};
use oled_arcade::config::ArcadeConfig;
use oled_arcade::display::FrameBuffer;
use oled_arcade::entities::{EnemyBullet, GameStatus};
use oled_arcade::event::FrameEvent;
use oled_arcade::input::Panel;
use oled_arcade::menu::GameKind;
use oled_arcade::scores::HighScores;

use rand::rngs::StdRng;
use rand::SeedableRng;

const IDLE: Panel = Panel([false; 4]);
const SHOOT: Panel = Panel([false, true, false, false]);
const DOWN: Panel = Panel([false, false, true, false]);
const UP: Panel = Panel([false, false, false, true]);

fn make_app() -> App {
    App::new(ArcadeConfig::default(), HighScores::default())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn selected(app: &App) -> usize {
    match &app.screen {
        Screen::Menu(menu) => menu.selected,
        other => panic!("not in menu: {other:?}"),
    }
}

/// Press and release one button in the menu.
fn tap(app: &mut App, panel: Panel, now: u64, rng: &mut StdRng) -> Vec<FrameEvent> {
    let mut events = app.step(&panel, now, rng);
    events.extend(app.step(&IDLE, now + 30, rng));
    events
}

#[test]
fn menu_wraps_both_ways() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    assert_eq!(app.current_game(), None);

    tap(&mut app, UP, 0, &mut rng);
    assert_eq!(selected(&app), 3);
    tap(&mut app, DOWN, 60, &mut rng);
    assert_eq!(selected(&app), 0);
    tap(&mut app, DOWN, 120, &mut rng);
    assert_eq!(selected(&app), 1);
}

#[test]
fn held_button_moves_cursor_once() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    for t in 0..10 {
        app.step(&DOWN, t * 30, &mut rng);
    }
    assert_eq!(selected(&app), 1);
}

#[test]
fn shoot_launches_highlighted_game() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    tap(&mut app, DOWN, 0, &mut rng);
    let events = app.step(&SHOOT, 60, &mut rng);
    assert_eq!(events, vec![FrameEvent::GameStarted(GameKind::Snake)]);
    assert_eq!(app.current_game(), Some(GameKind::Snake));
}

#[test]
fn shooter_game_over_records_stage() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    app.launch(GameKind::Shooter, &IDLE, &mut rng);
    if let Screen::Shooter(state) = &mut app.screen {
        state.player.lives = 1;
        state.stage = 3;
        state.enemy_bullets.allocate(EnemyBullet { x: 5, y: 16 });
    }

    let events = app.step(&IDLE, 0, &mut rng);
    assert!(events.contains(&FrameEvent::GameOver { stage: 3, score: 0 }));
    assert!(events.contains(&FrameEvent::NewBest {
        game: GameKind::Shooter,
        value: 3,
    }));
    assert_eq!(app.scores.shooter_stage, 3);
    match &app.screen {
        Screen::Shooter(state) => assert_eq!(state.status, GameStatus::GameOver),
        other => panic!("left the shooter: {other:?}"),
    }
}

#[test]
fn jump_crash_returns_to_menu_with_best() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    app.launch(GameKind::Jump, &IDLE, &mut rng);
    if let Screen::Jump(state) = &mut app.screen {
        state.score = 4;
        state.obstacle_x = 12;
    }

    let events = app.step(&IDLE, 100, &mut rng);
    assert_eq!(events, vec![FrameEvent::JumpCrashed { score: 4 }]);

    let events = app.step(&IDLE, 1000, &mut rng);
    assert!(events.is_empty());
    assert_eq!(app.current_game(), Some(GameKind::Jump));

    let events = app.step(&IDLE, 1600, &mut rng);
    assert_eq!(
        events,
        vec![
            FrameEvent::NewBest {
                game: GameKind::Jump,
                value: 4,
            },
            FrameEvent::ReturnedToMenu,
        ]
    );
    assert_eq!(app.current_game(), None);
    assert_eq!(app.scores.jump, 4);
}

#[test]
fn back_to_menu_ignores_button_still_held() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    app.launch(GameKind::ButtonTest, &IDLE, &mut rng);
    app.step(&SHOOT, 0, &mut rng);
    assert_eq!(app.screen, Screen::ButtonTest(SHOOT));

    let events = app.back_to_menu(&SHOOT);
    assert_eq!(events, vec![FrameEvent::ReturnedToMenu]);

    // shoot is still down: no relaunch until it is pressed again
    assert!(app.step(&SHOOT, 30, &mut rng).is_empty());
    assert_eq!(app.current_game(), None);
    app.step(&IDLE, 60, &mut rng);
    let events = app.step(&SHOOT, 90, &mut rng);
    assert_eq!(events, vec![FrameEvent::GameStarted(GameKind::Shooter)]);
}

#[test]
fn back_to_menu_from_menu_is_noop() {
    let mut app = make_app();
    assert!(app.back_to_menu(&IDLE).is_empty());
}

#[test]
fn draw_follows_screen() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    let mut menu_frame = FrameBuffer::new();
    app.draw(&mut menu_frame).unwrap();

    app.launch(GameKind::Jump, &IDLE, &mut rng);
    let mut jump_frame = FrameBuffer::new();
    app.draw(&mut jump_frame).unwrap();

    assert_ne!(menu_frame, jump_frame);
    assert!((0..128).all(|x| jump_frame.pixel(x, 30)));
}

#[test]
fn shooter_game_over_records_best_score() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    app.launch(GameKind::Shooter, &IDLE, &mut rng);
    if let Screen::Shooter(state) = &mut app.screen {
        state.player.lives = 1;
        state.score = 4;
        state.enemy_bullets.allocate(EnemyBullet { x: 5, y: 16 });
    }

    let events = app.step(&IDLE, 0, &mut rng);
    assert!(events.contains(&FrameEvent::NewBestScore { value: 4 }));
    assert_eq!(app.scores.shooter_score, 4);
}

#[test]
fn leaving_shooter_keeps_best_score() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    app.launch(GameKind::Shooter, &IDLE, &mut rng);
    if let Screen::Shooter(state) = &mut app.screen {
        state.score = 7;
    }
    let events = app.back_to_menu(&IDLE);
    assert!(events.contains(&FrameEvent::NewBestScore { value: 7 }));
    assert_eq!(app.scores.shooter_score, 7);
}

#[test]
fn launch_button_does_not_fire_until_released() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    let events = app.step(&SHOOT, 0, &mut rng);
    assert_eq!(events, vec![FrameEvent::GameStarted(GameKind::Shooter)]);

    // still holding shoot: no bullet
    app.step(&SHOOT, 30, &mut rng);
    match &app.screen {
        Screen::Shooter(state) => assert!(state.bullets.is_empty()),
        other => panic!("not in shooter: {other:?}"),
    }

    // released, then pressed again: fires
    app.step(&IDLE, 60, &mut rng);
    app.step(&SHOOT, 90, &mut rng);
    match &app.screen {
        Screen::Shooter(state) => assert_eq!(state.bullets.active_count(), 1),
        other => panic!("not in shooter: {other:?}"),
    }
}

#[test]
fn held_launch_button_does_not_mask_other_buttons() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    app.step(&SHOOT, 0, &mut rng);
    let shoot_and_up = Panel([false, true, false, true]);
    app.step(&shoot_and_up, 30, &mut rng);
    match &app.screen {
        Screen::Shooter(state) => {
            assert!(state.bullets.is_empty());
            assert_eq!(state.player.y, 13);
        }
        other => panic!("not in shooter: {other:?}"),
    }
}
