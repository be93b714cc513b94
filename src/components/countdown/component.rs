//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component creates an HTML canvas element, builds the particle pool
//! once, and runs the animation loop via `requestAnimationFrame`. A
//! reactive effect reapplies the visible-particle budget to the pool
//! whenever the countdown publishes a new value, so visibility changes at
//! tick rate while positions advance at frame rate.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use super::render;
use super::theme::ParticleStyle;

/// Renders the animated particle backdrop on a canvas element.
///
/// `budget` is the visible-particle count; the pool prefix of that length
/// is drawn each frame. The component sizes itself to its parent container
/// by default; set `fullscreen = true` to fill the viewport and follow
/// window resizes. Explicit `width`/`height` override automatic sizing.
/// Without a usable 2D context the backdrop is skipped entirely and only
/// a warning is logged.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] budget: Signal<i64>,
	#[prop(default = ParticleStyle::default())] particle_style: ParticleStyle,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (field_init, animate_init, resize_cb_init) =
		(field.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Degraded mode: without a 2d context the countdown text still
		// renders, only the backdrop is skipped.
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(obj)) => match obj.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("particle-field: unexpected 2d context type, skipping backdrop");
					return;
				}
			},
			_ => {
				warn!("particle-field: 2d context unavailable, skipping backdrop");
				return;
			}
		};

		let mut new_field = ParticleField::new(&particle_style, w, h);
		new_field.set_visible_count(budget.get_untracked());
		info!(
			"particle-field: {} particles allocated, {} visible",
			new_field.len(),
			new_field.visible_count()
		);
		*field_init.borrow_mut() = Some(new_field);

		if fullscreen {
			let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				// Bounds only; particles outside the new extent wander
				// back on their own.
				if let Some(ref mut f) = *field_resize.borrow_mut() {
					f.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (field_anim, animate_inner) = (field_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.update();
				render::render(f, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Visibility assignment runs once per countdown tick, not per frame.
	// The tick's write lands before the next frame reads the flags; both
	// run on the one thread.
	let field_budget = field.clone();
	Effect::new(move |_| {
		let b = budget.get();
		if let Some(ref mut f) = *field_budget.borrow_mut() {
			f.set_visible_count(b);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: absolute; top: 0; left: 0; z-index: 0; display: block;"
		/>
	}
}
