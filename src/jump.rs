//! Endless runner: hop over one recycling obstacle.

use crate::config::JumpTuning;
use crate::event::FrameEvent;
use crate::input::JumpInput;
use crate::SCREEN_WIDTH;

pub const GROUND_Y: i32 = 20;
pub const PLAYER_X: i32 = 5;
pub const PLAYER_W: i32 = 5;
pub const PLAYER_H: i32 = 10;
pub const OBSTACLE_Y: i32 = 22;
pub const OBSTACLE_W: i32 = 5;
pub const OBSTACLE_H: i32 = 8;
const JUMP_VELOCITY: i32 = -6;
const OBSTACLE_SPEED: i32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpStatus {
    Running,
    Crashed { at: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpState {
    /// Top edge of the runner.
    pub player_y: i32,
    pub velocity: i32,
    pub jumping: bool,
    pub obstacle_x: i32,
    pub score: u32,
    pub status: JumpStatus,
    pub finished: bool,
    pub tuning: JumpTuning,
}

impl JumpState {
    pub fn new(tuning: JumpTuning) -> Self {
        JumpState {
            player_y: GROUND_Y,
            velocity: 0,
            jumping: false,
            obstacle_x: SCREEN_WIDTH,
            score: 0,
            status: JumpStatus::Running,
            finished: false,
            tuning,
        }
    }
}

/// Physics runs per tick, not per millisecond; `now` only times the banner.
pub fn tick(state: &JumpState, input: &JumpInput, now: u64) -> (JumpState, Vec<FrameEvent>) {
    let mut s = *state;
    let mut events = Vec::new();

    if let JumpStatus::Crashed { at } = s.status {
        if now.saturating_sub(at) >= s.tuning.game_over_banner_ms {
            s.finished = true;
        }
        return (s, events);
    }

    if input.jump && !s.jumping {
        s.jumping = true;
        s.velocity = JUMP_VELOCITY;
    }

    if s.jumping {
        s.player_y += s.velocity;
        s.velocity += 1;
        if s.player_y >= GROUND_Y {
            s.player_y = GROUND_Y;
            s.velocity = 0;
            s.jumping = false;
        }
    }

    s.obstacle_x -= OBSTACLE_SPEED;
    if s.obstacle_x < -OBSTACLE_W {
        s.obstacle_x = SCREEN_WIDTH;
        s.score += 1;
        events.push(FrameEvent::ObstacleCleared { score: s.score });
    }

    let overlaps_x = s.obstacle_x < PLAYER_X + PLAYER_W && s.obstacle_x + OBSTACLE_W > PLAYER_X;
    if overlaps_x && s.player_y + PLAYER_H > OBSTACLE_Y {
        s.status = JumpStatus::Crashed { at: now };
        events.push(FrameEvent::JumpCrashed { score: s.score });
    }

    (s, events)
}
