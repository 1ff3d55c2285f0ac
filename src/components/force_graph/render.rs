use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, LABEL_RADIUS};
use crate::session::{DrawPriority, GraphStore};

const BACKGROUND: &str = "#ffffff";
const LABEL_COLOR: &str = "#222222";
const RING_COLOR: &str = "#111111";
/// Alpha for nodes pushed back by a search.
const LOWERED_ALPHA: f64 = 0.25;

pub fn render(state: &ForceGraphState, store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, store, ctx);
	for priority in [DrawPriority::Lowered, DrawPriority::Normal, DrawPriority::Raised] {
		draw_nodes(state, store, ctx, priority);
	}
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, store: &GraphStore, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	for edge in store.edges() {
		// edges of hidden nodes go with them
		if store.render_attributes(edge.source).is_none()
			|| store.render_attributes(edge.target).is_none()
		{
			continue;
		}
		let (Some((x1, y1)), Some((x2, y2))) = (state.position(edge.source), state.position(edge.target))
		else {
			continue;
		};
		ctx.set_stroke_style_str(edge.color);
		ctx.set_line_width(edge.stroke_weight.max(0.2) / k);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_nodes(
	state: &ForceGraphState,
	store: &GraphStore,
	ctx: &CanvasRenderingContext2d,
	priority: DrawPriority,
) {
	let (k, scale) = (state.transform.k, state.node_scale());
	let font = format!("{}px sans-serif", 12.0 / k);

	for i in 0..store.len() {
		let Some(attrs) = store.render_attributes(i) else {
			continue;
		};
		if attrs.priority != priority {
			continue;
		}
		let Some((x, y)) = state.position(i) else {
			continue;
		};
		let screen_radius = attrs.size * scale;
		let radius = screen_radius / k;

		ctx.set_global_alpha(if priority == DrawPriority::Lowered {
			LOWERED_ALPHA
		} else {
			1.0
		});
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(attrs.color.as_str());
		ctx.fill();

		if attrs.ring {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 3.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(RING_COLOR);
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		if let Some(label) = attrs
			.label
			.filter(|_| attrs.ring || screen_radius >= LABEL_RADIUS)
		{
			ctx.set_fill_style_str(LABEL_COLOR);
			ctx.set_font(&font);
			let _ = ctx.fill_text(label, x + radius + 4.0 / k, y + 4.0 / k);
		}
		ctx.set_global_alpha(1.0);
	}
}
