use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent};

use crate::layout::NeuralNetworkData;

use super::render;
use super::state::SceneState;

type SharedState = Rc<RefCell<Option<SceneState>>>;

/// Canvas rendering of the network in perspective, with orbit controls.
#[component]
pub fn NeuralCanvas(
	#[prop(into)] data: Signal<NeuralNetworkData>,
	#[prop(into)] selected: Signal<Option<String>>,
	#[prop(into)] on_select: Callback<Option<String>>,
	#[prop(into)] reduced_effects: Signal<bool>,
	#[prop(default = 0.7)] edge_weight: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));

	let (state_init, animate_init, alive_anim) = (state.clone(), animate.clone(), alive.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut scene = data.with(|data| SceneState::new(data, w, h, edge_weight));
		scene.reduced_effects = reduced_effects.get_untracked();
		selected.with_untracked(|id| scene.select(id.as_deref()));
		debug!("scene rebuilt with {} nodes", scene.nodes.len());
		*state_init.borrow_mut() = Some(scene);

		if animate_init.borrow().is_some() {
			return;
		}
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};
		let (state_anim, animate_inner, alive_inner) =
			(state_init.clone(), animate_init.clone(), alive_anim.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_inner.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_fx = state.clone();
	Effect::new(move |_| {
		let reduced = reduced_effects.get();
		if let Some(ref mut s) = *state_fx.borrow_mut() {
			s.reduced_effects = reduced;
		}
	});

	let state_sel = state.clone();
	Effect::new(move |_| {
		selected.with(|id| {
			if let Some(ref mut s) = *state_sel.borrow_mut() {
				s.select(id.as_deref());
			}
		});
	});

	let state_resize = state.clone();
	let resize_handle = window_event_listener(ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (nw, nh) = parent_size(&canvas);
		canvas.set_width(nw as u32);
		canvas.set_height(nh as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(nw, nh);
		}
	});
	on_cleanup(move || {
		alive.store(false, Ordering::Relaxed);
		resize_handle.remove();
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_drag(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let point = local_point(canvas_ref, ev.client_x(), ev.client_y());
		let picked = release(&state_mu, point);
		if let Some(picked) = picked {
			on_select.run(picked);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom(if ev.delta_y() > 0.0 { 1.1 } else { 0.9 });
		}
	};

	let state_ts = state.clone();
	let on_touchstart = move |ev: TouchEvent| {
		let touches = ev.touches();
		if let Some(ref mut s) = *state_ts.borrow_mut() {
			match (touches.get(0), touches.get(1)) {
				(Some(a), Some(b)) => {
					s.end_drag();
					s.pinch.active = true;
					s.pinch.last_span = span(&a, &b);
				}
				(Some(a), None) => {
					if let Some((x, y)) = local_point(canvas_ref, a.client_x(), a.client_y()) {
						s.begin_drag(x, y);
					}
				}
				_ => {}
			}
		}
	};

	let state_tm = state.clone();
	let on_touchmove = move |ev: TouchEvent| {
		ev.prevent_default();
		let touches = ev.touches();
		if let Some(ref mut s) = *state_tm.borrow_mut() {
			match (touches.get(0), touches.get(1)) {
				(Some(a), Some(b)) if s.pinch.active => {
					let next = span(&a, &b);
					if next > 0.0 && s.pinch.last_span > 0.0 {
						s.zoom(s.pinch.last_span / next);
					}
					s.pinch.last_span = next;
				}
				(Some(a), None) => {
					if let Some((x, y)) = local_point(canvas_ref, a.client_x(), a.client_y()) {
						s.drag_to(x, y);
					}
				}
				_ => {}
			}
		}
	};

	let state_te = state.clone();
	let on_touchend = move |ev: TouchEvent| {
		if ev.touches().length() > 0 {
			return;
		}
		let point = ev
			.changed_touches()
			.get(0)
			.and_then(|t| local_point(canvas_ref, t.client_x(), t.client_y()));
		if let Some(ref mut s) = *state_te.borrow_mut() {
			s.pinch.active = false;
		}
		if let Some(picked) = release(&state_te, point) {
			on_select.run(picked);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="neural-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			on:touchstart=on_touchstart
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style="display: block; cursor: grab; touch-action: none;"
		/>
	}
}

/// End a drag; a click picks the node under the pointer, or clears the selection.
fn release(state: &SharedState, point: Option<(f64, f64)>) -> Option<Option<String>> {
	let mut guard = state.borrow_mut();
	let s = guard.as_mut()?;
	if !s.end_drag() {
		return None;
	}
	let (x, y) = point?;
	Some(s.node_at_position(x, y).map(|idx| s.nodes[idx].id.clone()))
}

fn local_point(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	client_x: i32,
	client_y: i32,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((client_x as f64 - rect.left(), client_y as f64 - rect.top()))
}

fn span(a: &web_sys::Touch, b: &web_sys::Touch) -> f64 {
	let (dx, dy) = (
		(a.client_x() - b.client_x()) as f64,
		(a.client_y() - b.client_y()) as f64,
	);
	(dx * dx + dy * dy).sqrt()
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|(w, h)| *w > 0.0 && *h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}
