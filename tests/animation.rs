use std::time::{Duration, Instant};

use valentine::animation::AnimationDriver;
use valentine::curve::{heart_curve, phase_schedule, sample_grid, GRID_POINTS};

const TICK: Duration = Duration::from_millis(10);

#[test]
fn starts_at_phase_zero_without_advancing() {
    let epoch = Instant::now();
    let mut driver = AnimationDriver::new(TICK, epoch);
    assert_eq!(driver.index(), 0);
    assert_eq!(driver.phase(), phase_schedule()[0]);

    // Less than one interval elapsed: nothing moves.
    assert_eq!(driver.tick(epoch + Duration::from_millis(9)), 0);
    assert_eq!(driver.index(), 0);
}

#[test]
fn advances_one_schedule_entry_per_interval() {
    let epoch = Instant::now();
    let mut driver = AnimationDriver::new(TICK, epoch);
    assert_eq!(driver.tick(epoch + TICK), 1);
    assert_eq!(driver.index(), 1);
    assert_eq!(driver.phase(), phase_schedule()[1]);
}

#[test]
fn catches_up_after_a_stalled_frame() {
    let epoch = Instant::now();
    let mut driver = AnimationDriver::new(TICK, epoch);

    // A 25 ms gap is two whole ticks, with 5 ms carried forward.
    assert_eq!(driver.tick(epoch + Duration::from_millis(25)), 2);
    assert_eq!(driver.index(), 2);

    // 5 ms later the carried remainder completes the third tick.
    assert_eq!(driver.tick(epoch + Duration::from_millis(30)), 1);
    assert_eq!(driver.index(), 3);
}

#[test]
fn wraps_to_schedule_start_after_a_full_cycle() {
    let epoch = Instant::now();
    let mut driver = AnimationDriver::new(TICK, epoch);
    assert_eq!(driver.tick(epoch + TICK * 200), 200);
    assert_eq!(driver.index(), 0);
    assert_eq!(driver.phase(), phase_schedule()[0]);
}

#[test]
fn long_stall_lands_on_the_modulo_position() {
    let epoch = Instant::now();
    let mut driver = AnimationDriver::new(TICK, epoch);
    driver.tick(epoch + TICK * 450);
    assert_eq!(driver.index(), 450 % 200);
}

#[test]
fn curve_state_is_a_pure_function_of_the_phase() {
    let epoch = Instant::now();
    let mut driver = AnimationDriver::new(TICK, epoch);
    driver.tick(epoch + TICK * 37);

    let grid = sample_grid();
    let points = driver.points();
    assert_eq!(points.len(), GRID_POINTS);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(p[0], grid[i]);
        assert_eq!(p[1], heart_curve(grid[i], driver.phase()));
    }
}
