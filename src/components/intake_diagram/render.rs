use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{DiagramState, NODE_RADIUS};

const NODE_COLOR: &str = "#1f77b4";
const EDGE_COLOR: &str = "rgba(100, 180, 255, 0.8)";
const NOT_CONNECTED_COLOR: &str = "#d62728";
const LABEL_COLOR: &str = "rgba(255, 255, 255, 0.9)";

pub fn render(state: &DiagramState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_symbols(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &DiagramState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 8.0 / k);

	for edge_id in state.graph.edge_ids() {
		let Some(edge) = state.graph.edge(edge_id) else {
			continue;
		};
		// Dangling connections have no drawable endpoints.
		let (Some(source), Some(target)) = (&edge.source, &edge.target) else {
			continue;
		};
		let (Some(s), Some(t)) = (state.symbol(source), state.symbol(target)) else {
			continue;
		};

		let (dx, dy) = (t.x - s.x, t.y - s.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		let color = if state.is_flagged(edge_id) {
			NOT_CONNECTED_COLOR
		} else {
			EDGE_COLOR
		};
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(line_width);
		ctx.begin_path();
		ctx.move_to(s.x + ux * NODE_RADIUS, s.y + uy * NODE_RADIUS);
		ctx.line_to(
			t.x - ux * (NODE_RADIUS + arrow_size),
			t.y - uy * (NODE_RADIUS + arrow_size),
		);
		ctx.stroke();

		ctx.set_fill_style_str(color);
		let (tip_x, tip_y) = (t.x - ux * NODE_RADIUS, t.y - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_symbols(state: &DiagramState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;

	for symbol in &state.symbols {
		let flagged = state.is_flagged(&symbol.id);

		ctx.begin_path();
		let _ = ctx.arc(symbol.x, symbol.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(NODE_COLOR);
		ctx.fill();
		if flagged {
			ctx.set_stroke_style_str(NOT_CONNECTED_COLOR);
			ctx.set_line_width(3.0 / k);
			ctx.stroke();
		}

		if let Some(label) = &symbol.label {
			ctx.set_fill_style_str(if flagged {
				NOT_CONNECTED_COLOR
			} else {
				LABEL_COLOR
			});
			ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
			let _ = ctx.fill_text(label, symbol.x + NODE_RADIUS + 4.0, symbol.y + 4.0);
		}
	}
}
