use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, Window};

use super::EnvironmentSnapshot;

/// Read viewport and platform signals from `window`. `webgl_available` is
/// passed in so the canvas probe can run once and be reused across resizes.
pub fn probe_environment(window: &Window, webgl_available: bool) -> EnvironmentSnapshot {
	let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	let navigator = window.navigator();

	let device_memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
		.ok()
		.and_then(|v| v.as_f64())
		.filter(|gb| *gb > 0.0);

	EnvironmentSnapshot {
		width: dimension(window.inner_width()),
		height: dimension(window.inner_height()),
		has_touch_events: js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart"))
			.unwrap_or(false),
		max_touch_points: navigator.max_touch_points().max(0) as u32,
		user_agent: navigator.user_agent().unwrap_or_default(),
		webgl_available,
		device_memory_gb,
	}
}

/// Whether a WebGL context can be created on a scratch canvas.
pub fn probe_webgl(window: &Window) -> bool {
	let Some(document) = window.document() else {
		return false;
	};
	let Ok(canvas) = document
		.create_element("canvas")
		.map(|el| el.unchecked_into::<HtmlCanvasElement>())
	else {
		return false;
	};

	["webgl", "experimental-webgl"]
		.iter()
		.any(|kind| matches!(canvas.get_context(kind), Ok(Some(_))))
}
