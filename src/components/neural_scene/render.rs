use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::SceneState;

const BACKGROUND: &str = "#0b1020";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	let (dash, gap) = (8.0, 4.0);
	let animated = !state.reduced_effects;
	if animated {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(-(state.flow_time * 30.0) % (dash + gap));
	}

	for &(from, to, strength) in &state.edges {
		let (Some(a), Some(b)) = (state.projected(from), state.projected(to)) else {
			continue;
		};
		let is_highlighted = state.is_highlighted(from) && state.is_highlighted(to);
		let base = 0.15 + 0.6 * strength * state.edge_weight;

		// t=0: every edge at base; t=1: highlighted edges brighten, others dim
		let (alpha, width) = if is_highlighted {
			(base + (0.95 - base) * t, 1.0 + strength * 2.0 + t)
		} else {
			(base * (1.0 - 0.75 * t), 1.0 + strength * 2.0 * (1.0 - 0.5 * t))
		};

		ctx.set_stroke_style_str(&format!("rgba(120, 190, 255, {alpha})"));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}

	if animated {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}
}

fn draw_nodes(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
	);

	for idx in state.draw_order() {
		let Some(p) = state.projected(idx) else {
			continue;
		};
		let node = &state.nodes[idx];
		let highlighted = state.is_highlighted(idx);
		let hovered = state.is_hovered(idx);
		let selected = state.selected == Some(idx);
		let base_radius = state.node_radius_px(&p);

		let (alpha, radius) = if has_highlight && !highlighted {
			(1.0 - 0.7 * t, base_radius * (1.0 - 0.15 * t))
		} else if hovered {
			(1.0, base_radius * (1.0 + 0.35 * t))
		} else {
			(1.0, base_radius)
		};

		if !state.reduced_effects && (hovered || selected) {
			let glow_radius = radius * if selected { 3.0 } else { 1.8 + 1.2 * t };
			let glow_alpha = if selected { 0.35 } else { 0.35 * t };
			if glow_alpha > 0.01 {
				if let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, radius * 0.3, p.x, p.y, glow_radius) {
					let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {glow_alpha})"));
					let _ = gradient
						.add_color_stop(0.6, &format!("rgba(200, 220, 255, {})", glow_alpha * 0.3));
					let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
					ctx.begin_path();
					let _ = ctx.arc(p.x, p.y, glow_radius, 0.0, 2.0 * PI);
					#[allow(deprecated)]
					ctx.set_fill_style(&gradient);
					ctx.fill();
				}
			}
		}

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();

		if selected || (hovered && t > 0.01) {
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, radius + 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		// Labels only where they stay readable
		if highlighted || p.scale > 40.0 {
			ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha * 0.85));
			ctx.set_font(&format!("{}px sans-serif", (p.scale * 0.25).clamp(10.0, 16.0)));
			let _ = ctx.fill_text(&node.title, p.x + radius + 4.0, p.y + 4.0);
		}
		ctx.set_global_alpha(1.0);
	}
}
