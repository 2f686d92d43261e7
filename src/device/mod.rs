//! Decides between the 3D scene and the 2D grid from viewport and platform signals.

mod hook;
mod probe;

use std::sync::LazyLock;

use regex::Regex;

pub use hook::{use_device_capabilities, watch_environment};
pub use probe::{probe_environment, probe_webgl};

/// Viewport widths below this are phones.
pub const TABLET_MIN_WIDTH: f64 = 768.0;
/// Viewport widths from this up are desktops.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;
/// Device-memory hints below this many GB count as constrained.
pub const LOW_MEMORY_GB: f64 = 4.0;

/// Android 1-4, iPhone OS 1-9 and iPad OS 1-9 user agents.
static OLD_MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"android [1-4](?:[.;)_\s]|$)|iphone os [1-9]_|ipad.*os [1-9]_").unwrap()
});

/// Raw signals read from the browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvironmentSnapshot {
	/// Viewport width in CSS pixels.
	pub width: f64,
	/// Viewport height in CSS pixels.
	pub height: f64,
	/// `ontouchstart` exists on the window.
	pub has_touch_events: bool,
	/// `navigator.maxTouchPoints`.
	pub max_touch_points: u32,
	/// `navigator.userAgent`.
	pub user_agent: String,
	/// A WebGL context could be created.
	pub webgl_available: bool,
	/// `navigator.deviceMemory`, where the browser exposes it.
	pub device_memory_gb: Option<f64>,
}

/// Viewport width class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenSize {
	/// Below [`TABLET_MIN_WIDTH`].
	Small,
	/// Tablet widths.
	Medium,
	/// From [`DESKTOP_MIN_WIDTH`] up.
	Large,
}

impl ScreenSize {
	/// Lower-case name.
	pub fn as_str(self) -> &'static str {
		match self {
			ScreenSize::Small => "small",
			ScreenSize::Medium => "medium",
			ScreenSize::Large => "large",
		}
	}
}

/// What the current device can render. Exactly one of `is_mobile`,
/// `is_tablet` and `is_desktop` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceCapabilities {
	/// Small screen.
	pub is_mobile: bool,
	/// Medium screen.
	pub is_tablet: bool,
	/// Large screen.
	pub is_desktop: bool,
	/// WebGL is available.
	pub has_webgl: bool,
	/// Not an old mobile OS, and not a small viewport with little memory.
	pub has_good_performance: bool,
	/// Touch events or touch points are present.
	pub supports_touch: bool,
	/// Width class the mobile, tablet and desktop flags derive from.
	pub screen_size: ScreenSize,
}

impl Default for DeviceCapabilities {
	/// Assumed before the first probe: a capable desktop.
	fn default() -> Self {
		Self {
			is_mobile: false,
			is_tablet: false,
			is_desktop: true,
			has_webgl: true,
			has_good_performance: true,
			supports_touch: false,
			screen_size: ScreenSize::Large,
		}
	}
}

impl DeviceCapabilities {
	/// Render the 3D scene only with WebGL, decent performance, and a non-phone viewport.
	pub fn should_use_3d(&self) -> bool {
		self.has_webgl && self.has_good_performance && !self.is_mobile
	}

	/// Tablets and slow devices get fewer visual effects.
	pub fn should_use_reduced_effects(&self) -> bool {
		self.is_tablet || !self.has_good_performance
	}
}

/// Whether the user agent names Android 1-4 or iOS / iPadOS 1-9.
pub fn is_old_mobile(user_agent: &str) -> bool {
	OLD_MOBILE_RE.is_match(&user_agent.to_lowercase())
}

/// Width class for a viewport `width`.
pub fn screen_size(width: f64) -> ScreenSize {
	if width < TABLET_MIN_WIDTH {
		ScreenSize::Small
	} else if width < DESKTOP_MIN_WIDTH {
		ScreenSize::Medium
	} else {
		ScreenSize::Large
	}
}

/// Classify a snapshot. Pure: equal snapshots give equal capabilities.
pub fn classify(env: &EnvironmentSnapshot) -> DeviceCapabilities {
	let screen_size = screen_size(env.width);

	let low_end_viewport = env.width < TABLET_MIN_WIDTH && env.height < DESKTOP_MIN_WIDTH;
	let limited_memory = env.device_memory_gb.is_some_and(|gb| gb < LOW_MEMORY_GB);
	let has_good_performance =
		!is_old_mobile(&env.user_agent) && !(low_end_viewport && limited_memory);

	DeviceCapabilities {
		is_mobile: screen_size == ScreenSize::Small,
		is_tablet: screen_size == ScreenSize::Medium,
		is_desktop: screen_size == ScreenSize::Large,
		has_webgl: env.webgl_available,
		has_good_performance,
		supports_touch: env.has_touch_events || env.max_touch_points > 0,
		screen_size,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) \
		AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1";
	const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
		(KHTML, like Gecko) Chrome/126.0 Safari/537.36";

	fn env(width: f64, height: f64, user_agent: &str) -> EnvironmentSnapshot {
		EnvironmentSnapshot {
			width,
			height,
			user_agent: user_agent.into(),
			webgl_available: true,
			..EnvironmentSnapshot::default()
		}
	}

	#[test]
	fn phone_viewport_is_mobile_and_small() {
		let caps = classify(&EnvironmentSnapshot {
			has_touch_events: true,
			max_touch_points: 5,
			..env(375.0, 667.0, IPHONE_UA)
		});
		assert!(caps.is_mobile);
		assert!(!caps.is_desktop);
		assert!(caps.supports_touch);
		assert_eq!(caps.screen_size, ScreenSize::Small);
		assert!(!caps.should_use_3d());
	}

	#[test]
	fn full_hd_desktop_is_large() {
		let caps = classify(&env(1920.0, 1080.0, DESKTOP_UA));
		assert!(caps.is_desktop);
		assert!(!caps.is_tablet);
		assert_eq!(caps.screen_size, ScreenSize::Large);
		assert!(caps.has_good_performance);
		assert!(caps.should_use_3d());
		assert!(!caps.should_use_reduced_effects());
	}

	#[test]
	fn width_thresholds() {
		assert_eq!(screen_size(767.9), ScreenSize::Small);
		assert_eq!(screen_size(768.0), ScreenSize::Medium);
		assert_eq!(screen_size(1023.0), ScreenSize::Medium);
		assert_eq!(screen_size(1024.0), ScreenSize::Large);
	}

	#[test]
	fn tablet_renders_3d_with_reduced_effects() {
		let caps = classify(&env(800.0, 1280.0, DESKTOP_UA));
		assert!(caps.is_tablet);
		assert!(caps.should_use_3d());
		assert!(caps.should_use_reduced_effects());
	}

	#[test]
	fn touch_points_alone_imply_touch() {
		let caps = classify(&EnvironmentSnapshot {
			max_touch_points: 1,
			..env(1280.0, 800.0, DESKTOP_UA)
		});
		assert!(caps.supports_touch);
	}

	#[test]
	fn old_mobile_agents_are_slow() {
		assert!(is_old_mobile("Mozilla/5.0 (Linux; U; Android 4.4.2; en-us)"));
		assert!(is_old_mobile("Mozilla/5.0 (iPhone; CPU iPhone OS 9_3 like Mac OS X)"));
		assert!(is_old_mobile("Mozilla/5.0 (iPad; CPU OS 8_1 like Mac OS X)"));
		assert!(!is_old_mobile("Mozilla/5.0 (Linux; Android 10; K)"));
		assert!(!is_old_mobile("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
		assert!(!is_old_mobile(IPHONE_UA));

		let caps = classify(&env(1280.0, 800.0, "Mozilla/5.0 (Linux; Android 4.1; Nexus)"));
		assert!(!caps.has_good_performance);
		assert!(!caps.should_use_3d());
		assert!(caps.should_use_reduced_effects());
	}

	#[test]
	fn low_memory_matters_only_on_small_viewports() {
		let small = EnvironmentSnapshot {
			device_memory_gb: Some(2.0),
			..env(600.0, 900.0, DESKTOP_UA)
		};
		assert!(!classify(&small).has_good_performance);

		let large = EnvironmentSnapshot {
			device_memory_gb: Some(2.0),
			..env(1440.0, 900.0, DESKTOP_UA)
		};
		assert!(classify(&large).has_good_performance);

		let unknown = EnvironmentSnapshot {
			device_memory_gb: None,
			..env(600.0, 900.0, DESKTOP_UA)
		};
		assert!(classify(&unknown).has_good_performance);
	}

	#[test]
	fn no_webgl_means_no_3d() {
		let caps = classify(&EnvironmentSnapshot {
			webgl_available: false,
			..env(1920.0, 1080.0, DESKTOP_UA)
		});
		assert!(!caps.should_use_3d());
	}

	#[test]
	fn repeated_snapshots_classify_identically() {
		let snapshot = env(1024.0, 768.0, DESKTOP_UA);
		assert_eq!(classify(&snapshot), classify(&snapshot.clone()));
	}
}
