use leptos::ev;
use leptos::prelude::*;
use log::debug;

use super::{DeviceCapabilities, EnvironmentSnapshot, classify, probe_environment, probe_webgl};

/// Reactive device capabilities, reclassified on every window resize.
///
/// WebGL support is probed once here; resizes only re-read the viewport and
/// platform signals.
pub fn use_device_capabilities() -> ReadSignal<DeviceCapabilities> {
	let Some(window) = web_sys::window() else {
		return signal(DeviceCapabilities::default()).0;
	};

	let webgl = probe_webgl(&window);
	watch_environment(move || web_sys::window().map(|window| probe_environment(&window, webgl)))
}

/// Classify `probe()` now and again on every window `resize`.
///
/// The signal only changes when the classification does. The listener is
/// removed when the current owner is cleaned up. A `None` from `probe` leaves
/// the previous value in place.
pub fn watch_environment(
	probe: impl Fn() -> Option<EnvironmentSnapshot> + 'static,
) -> ReadSignal<DeviceCapabilities> {
	let initial = probe().map(|env| classify(&env)).unwrap_or_default();
	debug!("device capabilities: {initial:?}");
	let (capabilities, set_capabilities) = signal(initial);

	let handle = window_event_listener(ev::resize, move |_| {
		let Some(env) = probe() else {
			return;
		};
		let next = classify(&env);
		if capabilities.with_untracked(|current| *current != next) {
			debug!("device capabilities changed: {next:?}");
			set_capabilities.set(next);
		}
	});
	on_cleanup(move || handle.remove());

	capabilities
}
