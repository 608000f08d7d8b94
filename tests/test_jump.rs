use oled_arcade::config::JumpTuning;
use oled_arcade::event::FrameEvent;
use oled_arcade::input::JumpInput;
use oled_arcade::jump::*;

fn make_state() -> JumpState {
    JumpState::new(JumpTuning::default())
}

const JUMP: JumpInput = JumpInput { jump: true };
const IDLE: JumpInput = JumpInput { jump: false };

#[test]
fn starts_grounded_with_obstacle_offscreen() {
    let s = make_state();
    assert_eq!(s.player_y, GROUND_Y);
    assert!(!s.jumping);
    assert_eq!(s.obstacle_x, 128);
    assert_eq!(s.score, 0);
}

#[test]
fn jump_rises_then_lands() {
    let s = make_state();
    let (mut s, _) = tick(&s, &JUMP, 0);
    assert!(s.jumping);
    assert_eq!(s.player_y, 14);
    assert_eq!(s.velocity, -5);

    let mut peak = s.player_y;
    for t in 1..20 {
        s.obstacle_x = 100; // keep the obstacle away
        let (next, _) = tick(&s, &IDLE, t * 30);
        peak = peak.min(next.player_y);
        s = next;
    }
    assert!(peak < 5);
    assert!(!s.jumping);
    assert_eq!(s.player_y, GROUND_Y);
}

#[test]
fn no_double_jump_in_air() {
    let s = make_state();
    let (s, _) = tick(&s, &JUMP, 0);
    let (s2, _) = tick(&s, &JUMP, 30);
    // gravity keeps acting: velocity climbs, not reset to -6
    assert_eq!(s2.velocity, -4);
}

#[test]
fn obstacle_wraps_and_scores() {
    let mut s = make_state();
    s.obstacle_x = -4;
    let (s2, events) = tick(&s, &IDLE, 0);
    assert_eq!(s2.obstacle_x, 128);
    assert_eq!(s2.score, 1);
    assert_eq!(events, vec![FrameEvent::ObstacleCleared { score: 1 }]);
}

#[test]
fn grounded_runner_hits_obstacle() {
    let mut s = make_state();
    s.obstacle_x = 12; // moves to 9
    let (s2, events) = tick(&s, &IDLE, 300);
    assert_eq!(s2.status, JumpStatus::Crashed { at: 300 });
    assert_eq!(events, vec![FrameEvent::JumpCrashed { score: 0 }]);
}

#[test]
fn airborne_runner_clears_obstacle() {
    let mut s = make_state();
    s.player_y = 0;
    s.velocity = 0;
    s.jumping = true;
    s.obstacle_x = 12;
    let (s2, _) = tick(&s, &IDLE, 0);
    assert_eq!(s2.status, JumpStatus::Running);
}

#[test]
fn crash_returns_after_banner() {
    let mut s = make_state();
    s.status = JumpStatus::Crashed { at: 1000 };
    let (s2, _) = tick(&s, &IDLE, 2000);
    assert!(!s2.finished);
    let (s3, _) = tick(&s, &IDLE, 2500);
    assert!(s3.finished);
}
