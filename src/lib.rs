//! launch-countdown: full-screen countdown timer over a particle backdrop.
//!
//! This crate provides a WASM countdown screen that renders the time left
//! until a fixed target instant, with an animated canvas backdrop whose
//! visible particle count shrinks as the deadline approaches, one particle
//! per remaining whole minute.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::JsValue;

pub mod components;

pub use components::countdown::{ParticleFieldCanvas, Theme, clock};

use components::countdown::start_countdown;

/// Target instant the countdown counts toward, in the host's local time.
pub const TARGET_DATE: &str = "2024-12-19T09:00:00";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("launch-countdown: logging initialized");
}

/// Milliseconds-since-epoch of [`TARGET_DATE`], via the host date parser.
fn target_ms() -> f64 {
	js_sys::Date::new(&JsValue::from_str(TARGET_DATE)).get_time()
}

/// Main application component.
/// Owns the countdown schedule and the particle backdrop, and renders the
/// remaining time as a centered overlay above the canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Page-level presentation is applied exactly once, here at the
	// composition root.
	let theme = Theme::default();
	if let Some(document) = web_sys::window().and_then(|w| w.document()) {
		theme.page.apply(&document);
	}

	let remaining = start_countdown(target_ms());
	let budget = Signal::derive(move || clock::visible_budget(remaining.get()));
	info!(
		"launch-countdown: target {}, {} whole minutes remaining",
		TARGET_DATE,
		budget.get_untracked()
	);

	let overlay_style = format!(
		"position: relative; z-index: 10; display: flex; justify-content: center; \
		 align-items: center; height: 100%; text-align: center; \
		 font-family: {}; font-size: {};",
		theme.overlay.font_family, theme.overlay.font_size
	);
	let narrow_rule = format!(
		"@media (max-width: {}px) {{ .countdown-overlay p {{ font-size: {}; }} }}",
		theme.overlay.narrow_max_width, theme.overlay.narrow_font_size
	);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Launch Countdown" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{narrow_rule}</Style>

		<div class="countdown-screen" style="position: relative; height: 100vh; overflow: hidden;">
			<ParticleFieldCanvas budget=budget particle_style=theme.particles.clone() fullscreen=true />
			<div class="countdown-overlay" style=overlay_style>
				<p>{move || clock::format_display(remaining.get())}</p>
			</div>
		</div>
	}
}
