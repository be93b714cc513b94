//! One-second countdown scheduling.
//!
//! Wraps a `setInterval` tick behind a read-only signal of remaining
//! milliseconds. The tick is the single writer; everything else (overlay
//! text, visible-particle budget) derives from the signal.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::prelude::*;
use log::warn;

/// Tick period, ms.
const TICK_MS: u64 = 1_000;

/// Milliseconds until `target_ms` by the host wall clock.
fn remaining_now(target_ms: f64) -> i64 {
	(target_ms - js_sys::Date::now()) as i64
}

/// Start the once-per-second countdown toward `target_ms` and return the
/// remaining-time signal.
///
/// The interval clears itself on the first tick that observes a
/// non-positive remaining time, and is also cleared when the owning
/// component is torn down. If the interval cannot be registered at all,
/// the signal keeps its initial value and the failure is logged.
pub fn start_countdown(target_ms: f64) -> ReadSignal<i64> {
	let (remaining, set_remaining) = signal(remaining_now(target_ms));

	let interval: Arc<Mutex<Option<IntervalHandle>>> = Arc::new(Mutex::new(None));
	let tick = {
		let interval = interval.clone();
		move || {
			let remaining_ms = remaining_now(target_ms);
			set_remaining.set(remaining_ms);

			if remaining_ms <= 0 {
				if let Some(handle) = interval.lock().unwrap().take() {
					handle.clear();
				}
			}
		}
	};

	match set_interval_with_handle(tick, Duration::from_millis(TICK_MS)) {
		Ok(handle) => *interval.lock().unwrap() = Some(handle),
		Err(e) => warn!("countdown: failed to schedule tick: {:?}", e),
	}

	// Stops the interval if the screen is torn down before the target
	// passes; the tick closure itself is owned by the scheduled interval.
	on_cleanup(move || {
		if let Some(handle) = interval.lock().unwrap().take() {
			handle.clear();
		}
	});

	remaining
}
