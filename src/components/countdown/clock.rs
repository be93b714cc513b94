//! Remaining-time arithmetic.
//!
//! Pure integer math over remaining milliseconds, kept free of wasm
//! imports so it runs under plain `cargo test` on the host. The schedule
//! feeds it wall-clock readings; everything here is derivation.

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds per day.
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// Whole minutes per day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Remaining time split into whole days, hours, minutes, and seconds.
///
/// Components are derived with truncating division and carry the sign of
/// the remaining duration: once the target has passed, every component is
/// `<= 0`. Clamping for display happens at the formatting boundary, not
/// here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeParts {
	/// Whole days left. Not displayed, but counted in the visible budget.
	pub days: i64,
	/// Whole hours left within the current day, in `0..24` for positive
	/// remaining time.
	pub hours: i64,
	/// Whole minutes left within the current hour, in `0..60` for positive
	/// remaining time.
	pub minutes: i64,
	/// Whole seconds left within the current minute, in `0..60` for
	/// positive remaining time.
	pub seconds: i64,
}

impl TimeParts {
	/// Decompose a remaining duration in milliseconds.
	pub fn from_remaining_ms(remaining_ms: i64) -> Self {
		Self {
			days: remaining_ms / MS_PER_DAY,
			hours: (remaining_ms % MS_PER_DAY) / MS_PER_HOUR,
			minutes: (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE,
			seconds: (remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND,
		}
	}

	/// Total remaining whole minutes, day component included.
	pub fn whole_minutes(&self) -> i64 {
		self.days * MINUTES_PER_DAY + self.hours * 60 + self.minutes
	}
}

/// Visible-particle budget for a remaining duration: one particle per
/// remaining whole minute. Non-positive once the target has passed.
pub fn visible_budget(remaining_ms: i64) -> i64 {
	TimeParts::from_remaining_ms(remaining_ms).whole_minutes()
}

/// Overlay text of the form `"1h 1m 1s"`, no zero-padding.
/// Components clamp to zero once the target has passed; the day component
/// is never shown.
pub fn format_display(remaining_ms: i64) -> String {
	let t = TimeParts::from_remaining_ms(remaining_ms);
	format!(
		"{}h {}m {}s",
		t.hours.max(0),
		t.minutes.max(0),
		t.seconds.max(0)
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decomposition_reconstructs_within_one_second() {
		let samples = [
			0,
			1,
			999,
			MS_PER_SECOND,
			MS_PER_MINUTE - 1,
			MS_PER_MINUTE,
			MS_PER_HOUR + 1,
			MS_PER_DAY - 1,
			MS_PER_DAY,
			90_061_000,
			7 * MS_PER_DAY - 1,
			7 * MS_PER_DAY,
		];
		for &t in &samples {
			let p = TimeParts::from_remaining_ms(t);
			let floor = p.days * MS_PER_DAY
				+ p.hours * MS_PER_HOUR
				+ p.minutes * MS_PER_MINUTE
				+ p.seconds * MS_PER_SECOND;
			assert!(floor <= t && t < floor + MS_PER_SECOND, "t = {t}");
			assert!((0..24).contains(&p.hours), "t = {t}");
			assert!((0..60).contains(&p.minutes), "t = {t}");
			assert!((0..60).contains(&p.seconds), "t = {t}");
		}
	}

	#[test]
	fn display_clamps_to_zero_past_target() {
		assert_eq!(format_display(0), "0h 0m 0s");
		assert_eq!(format_display(-1), "0h 0m 0s");
		assert_eq!(format_display(-5_000), "0h 0m 0s");
		assert_eq!(format_display(-3 * MS_PER_DAY), "0h 0m 0s");
	}

	#[test]
	fn display_one_of_each() {
		// 1 day, 1 hour, 1 minute, 1 second: the day is not shown.
		assert_eq!(format_display(90_061_000), "1h 1m 1s");
	}

	#[test]
	fn budget_counts_whole_minutes_across_days() {
		assert_eq!(visible_budget(90_061_000), 1_501);
		assert_eq!(visible_budget(MS_PER_MINUTE), 1);
		assert_eq!(visible_budget(MS_PER_MINUTE - 1), 0);
		assert_eq!(visible_budget(7 * MS_PER_DAY), 7 * MINUTES_PER_DAY);
	}

	#[test]
	fn budget_is_non_positive_past_target() {
		assert_eq!(visible_budget(0), 0);
		assert!(visible_budget(-5_000) <= 0);
		assert!(visible_budget(-2 * MS_PER_DAY) <= 0);
	}
}
