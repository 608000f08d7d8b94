//! Pure shooter logic.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus input, the tick timestamp and, where needed, an RNG
//! handle) and returns a brand-new `GameState`.  Side effects are limited to
//! the injected RNG.

use log::debug;
use rand::Rng;

use crate::config::ShooterTuning;
use crate::entities::{
    Boss, Bullet, Enemy, EnemyBullet, GameState, GameStatus, Player, Timers, BOSS_BOTTOM,
    BOSS_HEIGHT, BOSS_TOP, BOSS_WIDTH, BOSS_X, PLAYER_MAX_Y, PLAYER_MIN_Y, PLAYER_START_Y,
    PLAYER_X, SPAWN_KINDS,
};
use crate::event::FrameEvent;
use crate::input::Buttons;
use crate::pool::Pool;
use crate::{timer_elapsed, SCREEN_HEIGHT, SCREEN_WIDTH};

const ENEMY_SIZE: i32 = 4;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.
pub fn init_state(tuning: ShooterTuning) -> GameState {
    GameState {
        player: Player {
            x: PLAYER_X,
            y: PLAYER_START_Y,
            lives: tuning.starting_lives,
        },
        bullets: Pool::new(),
        enemies: Pool::new(),
        enemy_bullets: Pool::new(),
        boss: None,
        score: 0,
        stage: 1,
        status: GameStatus::Playing,
        timers: Timers::default(),
        pause_held: false,
        pause_lock_until: 0,
        game_over_shown: false,
        game_over_at: None,
        restart_armed: false,
        tuning,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_up(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.player.y > PLAYER_MIN_Y {
        next.player.y -= 1;
    }
    next
}

pub fn move_player_down(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.player.y < PLAYER_MAX_Y {
        next.player.y += 1;
    }
    next
}

/// Fire a bullet from the plane's nose if the cooldown allows.  The cooldown
/// restarts even when all bullet slots are busy.
pub fn player_shoot(state: &GameState, now: u64) -> GameState {
    let mut next = state.clone();
    if !timer_elapsed(next.timers.last_shot, now, next.tuning.shoot_cooldown_ms) {
        return next;
    }
    next.bullets.allocate(Bullet {
        x: next.player.x + 4,
        y: next.player.y + 1,
    });
    next.timers.last_shot = Some(now);
    next
}

/// Put one enemy at the right edge, if a slot is free.
pub fn spawn_enemy(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    if next.enemies.is_full() {
        return next;
    }
    let y = rng.gen_range(10..SCREEN_HEIGHT - 8);
    let shooter = next.score >= next.tuning.shooter_unlock_score && rng.gen_bool(0.5);
    let kind = SPAWN_KINDS[rng.gen_range(0..SPAWN_KINDS.len())];
    next.enemies.allocate(Enemy {
        x: SCREEN_WIDTH - ENEMY_SIZE,
        y,
        shooter,
        kind,
    });
    next
}

fn fire_enemy_bullet(state: &mut GameState, x: i32, y: i32) {
    state.enemy_bullets.allocate(EnemyBullet { x: x - 1, y: y + 1 });
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick at time `now` (ms).  All randomness
/// comes through `rng` so callers control determinism.
pub fn tick(
    state: &GameState,
    input: &Buttons,
    now: u64,
    rng: &mut impl Rng,
) -> (GameState, Vec<FrameEvent>) {
    let mut s = state.clone();
    let mut events = Vec::new();

    let pause_edge = input.pause && !s.pause_held;
    s.pause_held = input.pause;

    // ── 1. Game-over gate ────────────────────────────────────────────────────
    // Runs before the pause toggle on purpose: while the game is over the
    // pause button only drives the restart and never pauses.
    if s.status == GameStatus::GameOver {
        return (game_over_gate(s, input, now, &mut events), events);
    }

    // ── 2. Pause toggle ──────────────────────────────────────────────────────
    if pause_edge && now >= s.pause_lock_until {
        s.status = match s.status {
            GameStatus::Paused => {
                events.push(FrameEvent::Resumed);
                GameStatus::Playing
            }
            _ => {
                events.push(FrameEvent::Paused);
                GameStatus::Paused
            }
        };
        s.pause_lock_until = now + s.tuning.pause_debounce_ms;
    }
    if s.status == GameStatus::Paused {
        return (s, events);
    }

    // ── 3. Movement ──────────────────────────────────────────────────────────
    if input.up {
        s = move_player_up(&s);
    }
    if input.down {
        s = move_player_down(&s);
    }

    // ── 4. Shoot ─────────────────────────────────────────────────────────────
    if input.shoot {
        s = player_shoot(&s, now);
    }

    // ── 5. Spawn ─────────────────────────────────────────────────────────────
    if !s.in_boss_fight() && timer_elapsed(s.timers.last_spawn, now, s.tuning.spawn_interval_ms)
    {
        s = spawn_enemy(&s, rng);
        s.timers.last_spawn = Some(now);
    }

    // ── 6. Enemy volley ──────────────────────────────────────────────────────
    if timer_elapsed(s.timers.last_enemy_volley, now, s.tuning.enemy_fire_interval_ms) {
        let muzzles: Vec<(i32, i32)> = s
            .enemies
            .iter()
            .filter(|(_, e)| e.shooter)
            .map(|(_, e)| (e.x, e.y))
            .collect();
        for (x, y) in muzzles {
            fire_enemy_bullet(&mut s, x, y);
        }
        s.timers.last_enemy_volley = Some(now);
    }

    // ── 7. Boss fire ─────────────────────────────────────────────────────────
    if let Some(boss) = s.boss {
        if timer_elapsed(s.timers.last_boss_shot, now, s.tuning.boss_fire_interval_ms) {
            fire_enemy_bullet(&mut s, BOSS_X, boss.y + 5);
            s.timers.last_boss_shot = Some(now);
        }
    }

    // ── 8. Advance ───────────────────────────────────────────────────────────
    advance(&mut s, now);

    // ── 9. Collisions ────────────────────────────────────────────────────────
    resolve_collisions(&mut s, &mut events);

    // ── 10. Stage / boss transition ──────────────────────────────────────────
    if !s.in_boss_fight() && s.score >= s.tuning.boss_trigger_score {
        s.enemies.clear();
        let boss = Boss::for_stage(s.stage);
        events.push(FrameEvent::BossFightStarted {
            stage: s.stage,
            health: boss.health,
        });
        s.boss = Some(boss);
    }

    if s.player.lives == 0 {
        s.status = GameStatus::GameOver;
        s.game_over_shown = true;
        s.game_over_at = Some(now);
        s.restart_armed = false;
        events.push(FrameEvent::GameOver {
            stage: s.stage,
            score: s.score,
        });
    }

    (s, events)
}

/// Hold the banner for the configured time, then restart on a full
/// press-and-release of the pause button.
fn game_over_gate(
    mut s: GameState,
    input: &Buttons,
    now: u64,
    events: &mut Vec<FrameEvent>,
) -> GameState {
    let since = s.game_over_at.unwrap_or(now);
    if now.saturating_sub(since) < s.tuning.game_over_banner_ms {
        return s;
    }
    if input.pause {
        s.restart_armed = true;
        return s;
    }
    if !s.restart_armed {
        return s;
    }
    debug!("restarting shooter after game over at stage {}", s.stage);
    events.push(FrameEvent::Restarted);
    let mut fresh = init_state(s.tuning);
    fresh.timers = s.timers;
    fresh.pause_lock_until = now + s.tuning.pause_debounce_ms;
    fresh
}

fn advance(s: &mut GameState, now: u64) {
    s.bullets.retain(|b| {
        b.x += 2;
        b.x < SCREEN_WIDTH
    });
    s.enemies.retain(|e| {
        e.x -= 1;
        e.x > 0
    });
    s.enemy_bullets.retain(|eb| {
        eb.x -= 2;
        eb.x > 0
    });

    if let Some(boss) = s.boss.as_mut() {
        if timer_elapsed(s.timers.last_boss_move, now, s.tuning.boss_move_interval_ms) {
            boss.y += boss.dir;
            if boss.y <= BOSS_TOP || boss.y >= BOSS_BOTTOM {
                boss.dir = -boss.dir;
            }
            s.timers.last_boss_move = Some(now);
        }
    }
}

fn bullet_hits_enemy(b: &Bullet, e: &Enemy) -> bool {
    b.x >= e.x && b.x <= e.x + ENEMY_SIZE && b.y >= e.y && b.y <= e.y + ENEMY_SIZE
}

fn bullets_touch(b: &Bullet, eb: &EnemyBullet) -> bool {
    (b.x - eb.x).abs() <= 1 && (b.y - eb.y).abs() <= 1
}

fn resolve_collisions(s: &mut GameState, events: &mut Vec<FrameEvent>) {
    // ── player bullets ↔ enemies, then ↔ enemy bullets ──────────────────────
    let bullets: Vec<(usize, Bullet)> = s.bullets.iter().map(|(i, b)| (i, *b)).collect();
    for (bi, bullet) in bullets {
        let hit = s
            .enemies
            .iter()
            .find(|(_, e)| bullet_hits_enemy(&bullet, e))
            .map(|(ei, e)| (ei, e.kind));
        if let Some((ei, kind)) = hit {
            s.enemies.release(ei);
            s.bullets.release(bi);
            s.score += 1;
            events.push(FrameEvent::EnemyDestroyed { kind });
            continue;
        }

        let cancelled = s
            .enemy_bullets
            .iter()
            .find(|(_, eb)| bullets_touch(&bullet, eb))
            .map(|(ebi, _)| ebi);
        if let Some(ebi) = cancelled {
            s.enemy_bullets.release(ebi);
            s.bullets.release(bi);
            events.push(FrameEvent::ShotCancelled);
        }
    }

    // ── enemy bullets ↔ player ───────────────────────────────────────────────
    let player = s.player;
    let mut hits = 0;
    s.enemy_bullets.retain(|eb| {
        let hit = eb.x <= player.x + 3 && eb.y >= player.y && eb.y <= player.y + 4;
        if hit {
            hits += 1;
        }
        !hit
    });

    // ── enemies ↔ player (contact) ───────────────────────────────────────────
    s.enemies.retain(|e| {
        let hit = e.x <= player.x + 3 && e.y <= player.y + 4 && e.y + ENEMY_SIZE >= player.y;
        if hit {
            hits += 1;
        }
        !hit
    });

    for _ in 0..hits {
        if s.player.lives == 0 {
            break;
        }
        s.player.lives -= 1;
        events.push(FrameEvent::PlayerHit {
            lives_left: s.player.lives,
        });
    }

    // ── player bullets ↔ boss ────────────────────────────────────────────────
    let Some(mut boss) = s.boss else {
        return;
    };
    s.bullets.retain(|b| {
        let hit = b.x >= BOSS_X
            && b.x <= BOSS_X + BOSS_WIDTH
            && b.y >= boss.y
            && b.y <= boss.y + BOSS_HEIGHT;
        if hit {
            boss.health = boss.health.saturating_sub(1);
            events.push(FrameEvent::BossHit {
                health: boss.health,
            });
        }
        !hit
    });

    if boss.health == 0 {
        events.push(FrameEvent::BossDefeated { stage: s.stage });
        s.boss = None;
        s.stage += 1;
        s.score = 0;
    } else {
        s.boss = Some(boss);
    }
}
