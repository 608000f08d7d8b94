//! Snake on a 2-pixel grid to the right of a score box.

use log::debug;
use rand::Rng;

use crate::config::SnakeTuning;
use crate::event::FrameEvent;
use crate::input::SnakeInput;
use crate::timer_elapsed;

pub const BLOCK_SIZE: i32 = 2;
pub const BORDER: i32 = 1;
pub const SCORE_BOX_WIDTH: i32 = 20;
pub const ORIGIN_X: i32 = SCORE_BOX_WIDTH + BORDER;
pub const ORIGIN_Y: i32 = BORDER;
pub const GRID_WIDTH: i32 = (crate::SCREEN_WIDTH - ORIGIN_X - BORDER) / BLOCK_SIZE;
pub const GRID_HEIGHT: i32 = (crate::SCREEN_HEIGHT - 2 * BORDER) / BLOCK_SIZE;
pub const MAX_LENGTH: usize = 100;
const START_LENGTH: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeStatus {
    Running,
    Paused,
    /// Crashed at the given time; the banner is up.
    Crashed { at: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeState {
    /// Grid cells, head first.
    pub body: Vec<(i32, i32)>,
    pub dir: (i32, i32),
    pub food: (i32, i32),
    pub status: SnakeStatus,
    pub last_move: Option<u64>,
    /// When the current down-button hold began.
    pub pause_hold_since: Option<u64>,
    /// When the current up+right hold began.
    pub exit_hold_since: Option<u64>,
    /// Leave for the menu.
    pub finished: bool,
    pub tuning: SnakeTuning,
}

impl SnakeState {
    pub fn new(tuning: SnakeTuning, rng: &mut impl Rng) -> Self {
        let body = (0..START_LENGTH as i32).map(|i| (5 - i, 4)).collect();
        let mut state = SnakeState {
            body,
            dir: (1, 0),
            food: (0, 0),
            status: SnakeStatus::Running,
            last_move: None,
            pause_hold_since: None,
            exit_hold_since: None,
            finished: false,
            tuning,
        };
        state.food = place_food(&state.body, rng);
        state
    }

    pub fn score(&self) -> u32 {
        self.body.len().saturating_sub(START_LENGTH) as u32
    }

    pub fn head(&self) -> (i32, i32) {
        self.body[0]
    }
}

/// Random free cell.  The grid always has room since the body is capped
/// far below the cell count.
fn place_food(body: &[(i32, i32)], rng: &mut impl Rng) -> (i32, i32) {
    loop {
        let cell = (rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT));
        if !body.contains(&cell) {
            return cell;
        }
    }
}

/// Turn only perpendicular to the current heading.  Later buttons win.
fn steer(dir: (i32, i32), input: &SnakeInput) -> (i32, i32) {
    let mut d = dir;
    if input.up && d.1 == 0 {
        d = (0, -1);
    }
    if input.down && d.1 == 0 {
        d = (0, 1);
    }
    if input.left && d.0 == 0 {
        d = (-1, 0);
    }
    if input.right && d.0 == 0 {
        d = (1, 0);
    }
    d
}

fn step_snake(s: &mut SnakeState, now: u64, rng: &mut impl Rng, events: &mut Vec<FrameEvent>) {
    let (hx, hy) = s.head();
    let head = (hx + s.dir.0, hy + s.dir.1);

    let off_grid = head.0 < 0 || head.0 >= GRID_WIDTH || head.1 < 0 || head.1 >= GRID_HEIGHT;
    // The tail cell moves away this step, so it is not an obstacle.
    let bites_self = s.body[..s.body.len() - 1].contains(&head);
    if off_grid || bites_self {
        s.status = SnakeStatus::Crashed { at: now };
        events.push(FrameEvent::SnakeCrashed { score: s.score() });
        return;
    }

    s.body.insert(0, head);
    if head == s.food && s.body.len() <= MAX_LENGTH {
        s.food = place_food(&s.body, rng);
        events.push(FrameEvent::SnakeAte {
            length: s.body.len(),
        });
    } else {
        s.body.pop();
    }
}

pub fn tick(
    state: &SnakeState,
    input: &SnakeInput,
    now: u64,
    rng: &mut impl Rng,
) -> (SnakeState, Vec<FrameEvent>) {
    let mut s = state.clone();
    let mut events = Vec::new();

    // ── Long-press down toggles pause ────────────────────────────────────────
    if input.down {
        match s.pause_hold_since {
            None => s.pause_hold_since = Some(now),
            Some(since) if now.saturating_sub(since) > s.tuning.pause_hold_ms => {
                s.pause_hold_since = None;
                s.status = match s.status {
                    SnakeStatus::Running => {
                        events.push(FrameEvent::Paused);
                        SnakeStatus::Paused
                    }
                    SnakeStatus::Paused => {
                        events.push(FrameEvent::Resumed);
                        SnakeStatus::Running
                    }
                    crashed => crashed,
                };
            }
            Some(_) => {}
        }
    } else {
        s.pause_hold_since = None;
    }

    match s.status {
        SnakeStatus::Running => {
            s.dir = steer(s.dir, input);
            if timer_elapsed(s.last_move, now, s.tuning.move_interval_ms) {
                step_snake(&mut s, now, rng, &mut events);
                s.last_move = Some(now);
            }
        }
        SnakeStatus::Crashed { at } => {
            if input.down && now.saturating_sub(at) >= s.tuning.game_over_banner_ms {
                debug!("snake finished with score {}", s.score());
                s.finished = true;
            }
        }
        SnakeStatus::Paused => {}
    }

    // ── Long-press up + right leaves the game ────────────────────────────────
    if input.up && input.right {
        match s.exit_hold_since {
            None => s.exit_hold_since = Some(now),
            Some(since) if now.saturating_sub(since) > s.tuning.exit_hold_ms => {
                s.finished = true;
            }
            Some(_) => {}
        }
    } else {
        s.exit_hold_since = None;
    }

    (s, events)
}
