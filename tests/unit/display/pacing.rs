use super::*;

#[test]
fn remaining_saturates() {
    let p = FramePacer::new(Duration::from_millis(20));
    assert_eq!(p.remaining(Duration::from_millis(5)), Duration::from_millis(15));
    assert_eq!(p.remaining(Duration::from_millis(20)), Duration::ZERO);
    assert_eq!(p.remaining(Duration::from_millis(35)), Duration::ZERO);
    assert_eq!(FramePacer::default().interval(), DEFAULT_FRAME_INTERVAL);
}

#[test]
fn pace_holds_for_the_interval() {
    let p = FramePacer::new(Duration::from_millis(10));
    let start = Instant::now();
    let out = p.pace(|| 7);
    assert_eq!(out, 7);
    assert!(start.elapsed() >= Duration::from_millis(10));
}

#[test]
fn zero_interval_never_sleeps_past_work() {
    let p = FramePacer::new(Duration::ZERO);
    assert_eq!(p.pace(|| "done"), "done");
}

#[test]
fn cooldown_counts_down() {
    let mut c = PauseCooldown::new(3);
    assert!(!c.is_paused());

    c.set_paused(true);
    assert!(c.is_paused());
    c.tick();
    c.tick();
    assert!(c.is_paused());
    c.tick();
    assert!(!c.is_paused());
    c.tick();
    assert!(!c.is_paused());

    c.toggle();
    assert!(c.is_paused());
    c.toggle();
    assert!(!c.is_paused());
    assert_eq!(PauseCooldown::default(), PauseCooldown::new(DEFAULT_PAUSE_TICKS));
}
