use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{BoxToolState, CIRCLE_RADIUS, STROKE_WIDTH};

const FILL_COLOR: &str = "rgba(255, 255, 255, 0.5)";
const STROKE_COLOR: &str = "rgba(0, 60, 136, 0.8)";
const BACKGROUND_COLOR: &str = "#1a1a2e";

pub fn render(state: &BoxToolState, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(0.0, 0.0, width, height);

	let Some(ref b) = state.box_state else {
		return;
	};

	let outline = b.outline();
	ctx.begin_path();
	ctx.move_to(outline[0].x, outline[0].y);
	for p in &outline[1..] {
		ctx.line_to(p.x, p.y);
	}
	ctx.close_path();
	ctx.set_fill_style_str(FILL_COLOR);
	ctx.fill();
	ctx.set_stroke_style_str(STROKE_COLOR);
	ctx.set_line_width(STROKE_WIDTH);
	ctx.stroke();

	// One handle per vertex, drawn over the outline.
	for p in &outline[..4] {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, CIRCLE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(FILL_COLOR);
		ctx.fill();
		ctx.set_stroke_style_str(STROKE_COLOR);
		ctx.set_line_width(STROKE_WIDTH);
		ctx.stroke();
	}
}
