use crate::entities::EnemyKind;
use crate::menu::GameKind;

/// Something that happened during one tick.  The front end logs these and
/// persists scores from them; game logic never reads them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameEvent {
    Paused,
    Resumed,
    EnemyDestroyed { kind: EnemyKind },
    /// A player bullet cancelled an enemy bullet.
    ShotCancelled,
    PlayerHit { lives_left: u32 },
    BossFightStarted { stage: u32, health: u32 },
    BossHit { health: u32 },
    BossDefeated { stage: u32 },
    GameOver { stage: u32, score: u32 },
    Restarted,
    SnakeAte { length: usize },
    SnakeCrashed { score: u32 },
    ObstacleCleared { score: u32 },
    JumpCrashed { score: u32 },
    GameStarted(GameKind),
    ReturnedToMenu,
    NewBest { game: GameKind, value: u32 },
    /// Best shooter score within a stage.
    NewBestScore { value: u32 },
}
