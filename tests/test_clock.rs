use oled_arcade::clock::{Clock, FixedStep, ManualClock};

use std::time::Duration;

fn ticks(step: &mut FixedStep, clock: &ManualClock) -> Vec<u64> {
    step.advance(clock.now_ms()).collect()
}

#[test]
fn manual_clock_is_driven_by_hand() {
    let clock = ManualClock::new(100);
    assert_eq!(clock.now_ms(), 100);
    clock.advance(25);
    assert_eq!(clock.now_ms(), 125);
    clock.set(7);
    assert_eq!(clock.now_ms(), 7);
}

#[test]
fn fixed_step_emits_whole_ticks() {
    let clock = ManualClock::new(0);
    let mut step = FixedStep::new(30, 5);

    assert!(ticks(&mut step, &clock).is_empty());
    clock.set(29);
    assert!(ticks(&mut step, &clock).is_empty());
    clock.set(30);
    assert_eq!(ticks(&mut step, &clock), vec![30]);
    clock.set(95);
    assert_eq!(ticks(&mut step, &clock), vec![60, 90]);
    assert_eq!(step.until_next(), Duration::from_millis(25));
}

#[test]
fn stall_is_capped_and_backlog_dropped() {
    let clock = ManualClock::new(0);
    let mut step = FixedStep::new(30, 5);
    for t in [0, 29, 30, 95] {
        clock.set(t);
        let _ = ticks(&mut step, &clock);
    }

    clock.set(1000);
    assert_eq!(ticks(&mut step, &clock), vec![120, 150, 180, 210, 240]);
    assert_eq!(step.sim_time(), 240);
    assert_eq!(step.until_next(), Duration::from_millis(20));

    // the dropped backlog does not come back later
    clock.set(1010);
    assert!(ticks(&mut step, &clock).is_empty());
    clock.set(1020);
    assert_eq!(ticks(&mut step, &clock), vec![270]);
}

#[test]
fn sim_time_is_independent_of_call_pattern() {
    let coarse_clock = ManualClock::new(0);
    let mut coarse = FixedStep::new(30, 100);
    let _ = ticks(&mut coarse, &coarse_clock);
    coarse_clock.set(600);
    let a = ticks(&mut coarse, &coarse_clock);

    let fine_clock = ManualClock::new(0);
    let mut fine = FixedStep::new(30, 100);
    let mut b = Vec::new();
    for t in (0..=600).step_by(7) {
        fine_clock.set(t);
        b.extend(ticks(&mut fine, &fine_clock));
    }
    fine_clock.set(600);
    b.extend(ticks(&mut fine, &fine_clock));

    assert_eq!(a, b);
    assert_eq!(coarse.sim_time(), 600);
    assert_eq!(fine.sim_time(), 600);
}

#[test]
fn zero_step_is_clamped() {
    let step = FixedStep::new(0, 0);
    assert_eq!(step.step_ms(), 1);
}
