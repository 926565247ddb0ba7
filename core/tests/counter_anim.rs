use kazari_core::counter::{CountUp, COUNT_UP_DURATION_MS, COUNT_UP_FRAME_MS};

const FRAME_BOUND: usize = (COUNT_UP_DURATION_MS / COUNT_UP_FRAME_MS) as usize + 2;

fn run_to_completion(target: u32) -> (Vec<u32>, usize) {
    let mut counter = CountUp::new(target);
    let mut frames = Vec::new();
    while !counter.done() {
        assert!(frames.len() < FRAME_BOUND, "count-up for {target} never finished");
        frames.push(counter.frame());
    }
    let total = frames.len();
    (frames, total)
}

#[test]
fn reaches_exactly_one_hundred() {
    let (frames, total) = run_to_completion(100);
    assert_eq!(frames.last().copied(), Some(100));
    assert!(total <= FRAME_BOUND);
    for value in &frames {
        assert!(*value <= 100, "displayed {value} above target");
    }
}

#[test]
fn displayed_values_never_decrease() {
    let (frames, _) = run_to_completion(1234);
    for pair in frames.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    assert_eq!(frames.last().copied(), Some(1234));
}

#[test]
fn frame_count_is_independent_of_magnitude() {
    let (_, small) = run_to_completion(7);
    let (_, large) = run_to_completion(5_000_000);
    assert!(small <= FRAME_BOUND);
    assert!(large <= FRAME_BOUND);
}

#[test]
fn zero_target_finishes_immediately() {
    let mut counter = CountUp::new(0);
    assert_eq!(counter.frame(), 0);
    assert!(counter.done());
}

#[test]
fn done_counter_keeps_reporting_target() {
    let mut counter = CountUp::new(42);
    while !counter.done() {
        counter.frame();
    }
    assert_eq!(counter.frame(), 42);
    assert_eq!(counter.frame(), 42);
}
