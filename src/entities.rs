//! Shooter entity types: pure data, no logic.

use crate::config::ShooterTuning;
use crate::pool::Pool;

pub const MAX_BULLETS: usize = 3;
pub const MAX_ENEMIES: usize = 5;
pub const MAX_ENEMY_BULLETS: usize = 5;

/// The player's plane never leaves this column.
pub const PLAYER_X: i32 = 4;
pub const PLAYER_START_Y: i32 = 14;
pub const PLAYER_MIN_Y: i32 = 10;
pub const PLAYER_MAX_Y: i32 = crate::SCREEN_HEIGHT - 6;

/// Left edge of the boss hitbox.
pub const BOSS_X: i32 = 100;
pub const BOSS_WIDTH: i32 = 6;
pub const BOSS_HEIGHT: i32 = 12;
pub const BOSS_TOP: i32 = 10;
pub const BOSS_BOTTOM: i32 = crate::SCREEN_HEIGHT - 14;

/// Render shape of an enemy.  Cosmetic only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnemyKind {
    /// `o`: outlined circle.
    Orb,
    /// `x`: two crossed lines.
    Cross,
    /// `s`: filled triangle.
    Spike,
    /// `b`: outlined square.
    Box,
    /// Anything else: filled square.
    #[default]
    Block,
}

/// Kinds handed out by the spawner.  `Block` is never spawned.
pub const SPAWN_KINDS: [EnemyKind; 4] = [
    EnemyKind::Orb,
    EnemyKind::Cross,
    EnemyKind::Spike,
    EnemyKind::Box,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyBullet {
    pub x: i32,
    pub y: i32,
}

// ── Player, enemy & boss ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    /// Fires on the enemy-volley timer.
    pub shooter: bool,
    pub kind: EnemyKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boss {
    pub y: i32,
    /// +1 moving down, -1 moving up.
    pub dir: i32,
    pub health: u32,
    pub max_health: u32,
}

impl Boss {
    pub fn for_stage(stage: u32) -> Self {
        let max_health = 10 + 5 * stage;
        Boss {
            y: BOSS_TOP,
            dir: 1,
            health: max_health,
            max_health,
        }
    }
}

/// Last-fired timestamps (ms) of every cadence.  `None` = never fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub last_shot: Option<u64>,
    pub last_spawn: Option<u64>,
    pub last_enemy_volley: Option<u64>,
    pub last_boss_move: Option<u64>,
    pub last_boss_shot: Option<u64>,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire shooter state.  Cloneable so `tick` can return a new copy
/// without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub bullets: Pool<Bullet, MAX_BULLETS>,
    pub enemies: Pool<Enemy, MAX_ENEMIES>,
    pub enemy_bullets: Pool<EnemyBullet, MAX_ENEMY_BULLETS>,
    /// `Some` while a boss fight is running.
    pub boss: Option<Boss>,
    pub score: u32,
    pub stage: u32,
    pub status: GameStatus,
    pub timers: Timers,
    /// Pause button level seen on the previous tick (edge detection).
    pub pause_held: bool,
    /// Pause edges are ignored until this time.
    pub pause_lock_until: u64,
    /// The game-over banner has been shown for the current game over.
    pub game_over_shown: bool,
    pub game_over_at: Option<u64>,
    /// Pause was pressed after the game-over banner; releasing it restarts.
    pub restart_armed: bool,
    pub tuning: ShooterTuning,
}

impl GameState {
    pub fn in_boss_fight(&self) -> bool {
        self.boss.is_some()
    }
}
