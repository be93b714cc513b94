// Native integration tests for the `launch-countdown` crate.
// Nothing here touches the DOM or timers; only the pure countdown and
// pool logic is exercised, so `cargo test` runs on the host.

use launch_countdown::clock;
use launch_countdown::components::countdown::theme::ParticleStyle;
use launch_countdown::components::countdown::{POOL_SIZE, ParticleField};

fn field() -> ParticleField {
	ParticleField::new(&ParticleStyle::default(), 1_280.0, 720.0)
}

// 1 day + 1 hour + 1 minute + 1 second: the text hides the day component,
// the budget counts it.
#[test]
fn one_of_each_scenario() {
	let remaining = 90_061_000;
	assert_eq!(clock::format_display(remaining), "1h 1m 1s");
	assert_eq!(clock::visible_budget(remaining), 1_501);

	let mut f = field();
	f.set_visible_count(clock::visible_budget(remaining));
	assert_eq!(f.visible_count(), 1_501);
	assert!(f.particles()[1_500].visible);
	assert!(!f.particles()[1_501].visible);
}

// Target already past: zeroed display, empty visible set.
#[test]
fn past_target_scenario() {
	let remaining = -5_000;
	assert_eq!(clock::format_display(remaining), "0h 0m 0s");

	let mut f = field();
	f.set_visible_count(clock::visible_budget(remaining));
	assert_eq!(f.visible_count(), 0);
	assert_eq!(f.len(), POOL_SIZE);
}

// The pool covers exactly the seven-day maximum at one particle a minute.
#[test]
fn pool_matches_seven_day_budget() {
	assert_eq!(POOL_SIZE, 1_440 * 7);
	let budget = clock::visible_budget(7 * clock::MS_PER_DAY);
	assert_eq!(budget as usize, POOL_SIZE);

	let mut f = field();
	f.set_visible_count(budget);
	assert_eq!(f.visible_count(), POOL_SIZE);
}

// One particle goes dark per elapsed minute.
#[test]
fn budget_drops_one_per_minute() {
	let start = 10 * clock::MS_PER_MINUTE;
	for m in 0..=10 {
		assert_eq!(clock::visible_budget(start - m * clock::MS_PER_MINUTE), 10 - m);
	}
}
