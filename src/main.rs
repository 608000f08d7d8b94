mod terminal;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal as term, ExecutableCommand,
};
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use oled_arcade::app::App;
use oled_arcade::clock::{Clock, FixedStep, MonotonicClock};
use oled_arcade::config::ArcadeConfig;
use oled_arcade::display::FrameBuffer;
use oled_arcade::event::FrameEvent;
use oled_arcade::input::Panel;
use oled_arcade::menu::GameKind;
use oled_arcade::scores::HighScores;
use oled_arcade::{logging, ArcadeError};

/// Frames a key stays down after its last press or repeat event.  Terminals
/// without release events rely on OS key repeat (≥ 15 Hz) to refresh it.
const HOLD_WINDOW: u64 = 4;

#[derive(Parser, Debug)]
#[command(name = "oled_arcade", about = "Four-button OLED arcade games in the terminal")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the menu and start this game
    #[arg(long, value_enum)]
    game: Option<StartGame>,

    /// Seed the RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StartGame {
    Shooter,
    Snake,
    Jump,
    Buttons,
}

impl From<StartGame> for GameKind {
    fn from(g: StartGame) -> Self {
        match g {
            StartGame::Shooter => GameKind::Shooter,
            StartGame::Snake => GameKind::Snake,
            StartGame::Jump => GameKind::Jump,
            StartGame::Buttons => GameKind::ButtonTest,
        }
    }
}

// ── Keyboard → button panel ───────────────────────────────────────────────────

/// Returns true if any of `keys` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

/// Keys wired to each panel button, in wiring order, for the given screen.
fn keymap(game: Option<GameKind>) -> [&'static [KeyCode]; 4] {
    match game {
        None | Some(GameKind::Shooter) => [
            &[KeyCode::Char('p'), KeyCode::Char('P'), KeyCode::Enter],
            &[KeyCode::Char(' ')],
            &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
            &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
        ],
        Some(GameKind::Snake) => [
            &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
            &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
        ],
        Some(GameKind::Jump) => [
            &[KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
            &[],
            &[],
            &[],
        ],
        Some(GameKind::ButtonTest) => [
            &[KeyCode::Char('1')],
            &[KeyCode::Char('2')],
            &[KeyCode::Char('3')],
            &[KeyCode::Char('4')],
        ],
    }
}

fn panel_for(game: Option<GameKind>, key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Panel {
    Panel(keymap(game).map(|keys| is_held(key_frame, keys, frame)))
}

// ── Events ────────────────────────────────────────────────────────────────────

fn handle_events(events: &[FrameEvent], app: &App, scores_path: &Path) {
    for ev in events {
        match ev {
            FrameEvent::GameOver { stage, score } => {
                info!("shooter game over at stage {stage} with score {score}")
            }
            FrameEvent::BossFightStarted { stage, health } => {
                info!("boss fight for stage {stage}, health {health}")
            }
            FrameEvent::BossDefeated { stage } => info!("boss of stage {stage} defeated"),
            FrameEvent::NewBest { .. } | FrameEvent::NewBestScore { .. } => {
                if let Err(e) = app.scores.save(scores_path) {
                    error!("failed to save high scores: {e}");
                }
            }
            other => debug!("{other:?}"),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// `key_frame` maps each key to the frame of its last press or repeat.  Keys
/// still fresh this frame become pressed panel buttons, so chords such as
/// snake's up + right work.
fn game_loop<W: Write>(
    out: &mut W,
    app: &mut App,
    rx: &mpsc::Receiver<Event>,
    config: &ArcadeConfig,
    rng: &mut StdRng,
) -> Result<(), ArcadeError> {
    let clock = MonotonicClock::new();
    let mut stepper = FixedStep::new(config.frame.tick_ms, config.frame.max_catch_up);
    let scores_path = config.storage.scores_path();

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    // Keys held across a screen change; they count again only after a fresh press.
    let mut stale: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut fb = FrameBuffer::new();

    terminal::clear(out)?;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Input ─────────────────────────────────────────────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    stale.remove(&code);
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Esc => {
                            let held = panel_for(None, &key_frame, frame);
                            let events = app.back_to_menu(&held);
                            handle_events(&events, app, &scores_path);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => match stale.get_mut(&code) {
                    Some(seen) => *seen = frame,
                    None => {
                        key_frame.insert(code, frame);
                    }
                },
                KeyEventKind::Release => {
                    stale.remove(&code);
                    key_frame.remove(&code);
                }
            }
        }
        stale.retain(|_, &mut seen| frame.saturating_sub(seen) <= HOLD_WINDOW);

        // ── Run every simulation tick that is due ─────────────────────────────
        for now in stepper.advance(clock.now_ms()) {
            let before = app.current_game();
            let panel = panel_for(before, &key_frame, frame);
            let events = app.step(&panel, now, rng);
            handle_events(&events, app, &scores_path);
            if app.current_game() != before {
                stale.extend(key_frame.drain());
            }
        }

        app.draw(&mut fb).unwrap_or_else(|never| match never {});
        terminal::present(out, &fb, app.current_game())?;

        let wait = stepper.until_next().saturating_sub(frame_start.elapsed());
        thread::sleep(wait);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), ArcadeError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ArcadeConfig::load(path)?,
        None => ArcadeConfig::default(),
    };
    logging::init(&config.logging)?;

    let scores = HighScores::load(&config.storage.scores_path());
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut app = App::new(config.clone(), scores);
    if let Some(game) = cli.game {
        app.launch(game.into(), &Panel::default(), &mut rng);
    }

    terminal::check_size()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    term::enable_raw_mode()?;
    out.execute(term::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Release events need the kitty keyboard protocol; without it keys
    // expire through HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    debug!("keyboard enhancement: {keyboard_enhanced}");

    // Blocking reads live on their own thread; the loop polls the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                warn!("input thread stopped: {e}");
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut app, &rx, &config, &mut rng);

    // Restore the terminal even when the loop failed
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(term::LeaveAlternateScreen);
    let _ = term::disable_raw_mode();

    // Keep whatever the current run achieved.
    let held = Panel::default();
    let events = app.back_to_menu(&held);
    if events
        .iter()
        .any(|e| matches!(e, FrameEvent::NewBest { .. } | FrameEvent::NewBestScore { .. }))
    {
        app.scores.save(&config.storage.scores_path())?;
    }

    if let Err(e) = &result {
        error!("arcade stopped: {e}");
    }
    result
}
