//! Canvas repaint for the particle backdrop.

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;

/// Clear the canvas and draw every visible particle as a filled square.
///
/// The clear leaves the canvas transparent; the page background supplies
/// the backdrop color. Hidden particles keep moving but are skipped here.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in field.particles() {
		if !p.visible {
			continue;
		}
		ctx.set_fill_style_str(&p.color.to_css());
		ctx.fill_rect(p.x, p.y, p.size, p.size);
	}
}
