//! Visual styling for the countdown screen.
//!
//! All presentation knobs live here as one [`Theme`] value owned by the
//! composition root, so components receive style explicitly instead of
//! mutating document state on their own.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Document-level presentation, applied once at the composition root.
#[derive(Clone, Debug)]
pub struct PageStyle {
	/// Page background behind the canvas.
	pub background: Color,
	/// Overlay text color.
	pub text: Color,
}

impl PageStyle {
	/// Write the page chrome onto `document`: zeroed body margins, hidden
	/// overflow, and the background/text colors.
	pub fn apply(&self, document: &Document) {
		if let Some(body) = document.body() {
			let style = body.style();
			let _ = style.set_property("margin", "0");
			let _ = style.set_property("padding", "0");
			let _ = style.set_property("background-color", &self.background.to_css());
			let _ = style.set_property("color", &self.text.to_css());
			let _ = style.set_property("overflow", "hidden");
		}
		if let Some(root) = document
			.document_element()
			.and_then(|e| e.dyn_into::<HtmlElement>().ok())
		{
			let style = root.style();
			let _ = style.set_property("height", "100%");
			let _ = style.set_property("background-color", &self.background.to_css());
		}
	}
}

impl Default for PageStyle {
	fn default() -> Self {
		Self {
			background: Color::rgb(0, 0, 0),
			text: Color::rgb(255, 255, 255),
		}
	}
}

/// Particle backdrop configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Minimum particle square size, px.
	pub size_min: f64,
	/// Maximum particle square size, px.
	pub size_max: f64,
	/// Velocity bound: each axis component is sampled in `[-speed, speed)`
	/// px per frame.
	pub speed: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			size_min: 2.0,
			size_max: 4.0,
			speed: 0.25,
		}
	}
}

/// Overlay text styling.
#[derive(Clone, Debug)]
pub struct OverlayStyle {
	pub font_family: &'static str,
	/// Base font size; viewport-relative so the text fills the screen.
	pub font_size: &'static str,
	/// Font size on narrow viewports.
	pub narrow_font_size: &'static str,
	/// Viewport width threshold for the narrow rule, px.
	pub narrow_max_width: u32,
}

impl Default for OverlayStyle {
	fn default() -> Self {
		Self {
			font_family: "monospace",
			font_size: "12vw",
			narrow_font_size: "25vw",
			narrow_max_width: 600,
		}
	}
}

/// Complete visual theme for the countdown screen.
#[derive(Clone, Debug, Default)]
pub struct Theme {
	pub page: PageStyle,
	pub particles: ParticleStyle,
	pub overlay: OverlayStyle,
}
