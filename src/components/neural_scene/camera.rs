use std::f64::consts::FRAC_PI_2;

use crate::layout::Vec3;

pub const MIN_DISTANCE: f64 = 3.0;
pub const MAX_DISTANCE: f64 = 30.0;
pub const OVERVIEW_DISTANCE: f64 = 15.0;
/// Distance kept from a focused node.
pub const FOCUS_DISTANCE: f64 = 7.0;

const NEAR: f64 = 0.1;
/// tan(30°), a 60° vertical field of view.
const HALF_FOV_TAN: f64 = 0.577_350_269;
const MAX_PITCH: f64 = FRAC_PI_2 - 0.05;

/// A world point mapped onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	pub x: f64,
	pub y: f64,
	/// Distance along the view axis, larger is further away.
	pub depth: f64,
	/// Pixels per world unit at this depth.
	pub scale: f64,
}

/// Orbit camera looking at `target` from `distance` away.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
	pub yaw: f64,
	pub pitch: f64,
	pub distance: f64,
	pub target: Vec3,
	goal_target: Vec3,
	goal_distance: f64,
}

impl Default for OrbitCamera {
	fn default() -> Self {
		Self {
			yaw: 0.0,
			pitch: 0.15,
			distance: OVERVIEW_DISTANCE,
			target: Vec3::ZERO,
			goal_target: Vec3::ZERO,
			goal_distance: OVERVIEW_DISTANCE,
		}
	}
}

impl OrbitCamera {
	pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<Projected> {
		let rel = p - self.target;
		let (sy, cy) = self.yaw.sin_cos();
		let (sp, cp) = self.pitch.sin_cos();

		let x = rel.x * cy - rel.z * sy;
		let z = rel.x * sy + rel.z * cy;
		let y = rel.y * cp - z * sp;
		let z = rel.y * sp + z * cp;

		let depth = self.distance - z;
		if depth < NEAR {
			return None;
		}
		let focal = 0.5 * width.min(height) / HALF_FOV_TAN;
		let scale = focal / depth;
		Some(Projected {
			x: width / 2.0 + x * scale,
			y: height / 2.0 - y * scale,
			depth,
			scale,
		})
	}

	/// Rotate by a screen-space drag of `dx`, `dy` pixels.
	pub fn orbit(&mut self, dx: f64, dy: f64) {
		self.yaw += dx * 0.005;
		self.pitch = (self.pitch + dy * 0.005).clamp(-MAX_PITCH, MAX_PITCH);
	}

	pub fn zoom(&mut self, factor: f64) {
		self.goal_distance = (self.goal_distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
	}

	pub fn focus_on(&mut self, point: Vec3) {
		self.goal_target = point;
		self.goal_distance = FOCUS_DISTANCE;
	}

	pub fn reset(&mut self, center: Vec3) {
		self.goal_target = center;
		self.goal_distance = OVERVIEW_DISTANCE;
	}

	/// Move toward the goal target and distance.
	pub fn ease(&mut self, dt: f64) {
		let t = (dt * 3.0).min(1.0);
		self.target += (self.goal_target - self.target) * t;
		self.distance += (self.goal_distance - self.distance) * t;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn target_projects_to_canvas_center() {
		let camera = OrbitCamera::default();
		let p = camera.project(Vec3::ZERO, 800.0, 600.0).unwrap();
		assert!((p.x - 400.0).abs() < 1e-9);
		assert!((p.y - 300.0).abs() < 1e-9);
		assert!((p.depth - OVERVIEW_DISTANCE).abs() < 1e-9);
	}

	#[test]
	fn closer_points_are_larger() {
		let camera = OrbitCamera {
			pitch: 0.0,
			..OrbitCamera::default()
		};
		let near = camera.project(Vec3::new(0.0, 0.0, 5.0), 800.0, 600.0).unwrap();
		let far = camera.project(Vec3::new(0.0, 0.0, -5.0), 800.0, 600.0).unwrap();
		assert!(near.scale > far.scale);
		assert!(near.depth < far.depth);
	}

	#[test]
	fn points_behind_the_camera_are_culled() {
		let camera = OrbitCamera {
			pitch: 0.0,
			..OrbitCamera::default()
		};
		assert!(camera.project(Vec3::new(0.0, 0.0, 20.0), 800.0, 600.0).is_none());
	}

	#[test]
	fn zoom_and_pitch_are_clamped() {
		let mut camera = OrbitCamera::default();
		camera.zoom(100.0);
		camera.orbit(0.0, 10_000.0);
		for _ in 0..200 {
			camera.ease(0.016);
		}
		assert!((camera.distance - MAX_DISTANCE).abs() < 1e-2);
		assert!(camera.pitch < FRAC_PI_2);
	}

	#[test]
	fn focus_eases_toward_point() {
		let mut camera = OrbitCamera::default();
		camera.focus_on(Vec3::new(4.0, 0.0, 0.0));
		for _ in 0..200 {
			camera.ease(0.016);
		}
		assert!((camera.target.x - 4.0).abs() < 1e-3);
		assert!((camera.distance - FOCUS_DISTANCE).abs() < 1e-3);
	}
}
