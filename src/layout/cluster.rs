use std::f64::consts::PI;

use rand::Rng;

use super::types::{LayoutBounds, Vec3};

/// Vertical flattening applied to every cluster.
const Y_FLATTEN: f64 = 0.8;
/// Per-point radius jitter, as a fraction of the cluster radius.
const RADIUS_JITTER: f64 = 0.3;

/// Distribute `count` points on a golden-angle spiral around `center`.
///
/// Each point's radius is jittered by ±30% and the vertical axis is
/// flattened; every coordinate is clamped into `bounds`.
pub fn cluster_positions<R: Rng>(
	count: usize,
	center: Vec3,
	radius: f64,
	bounds: &LayoutBounds,
	rng: &mut R,
) -> Vec<Vec3> {
	let golden_angle = PI * (3.0 - 5f64.sqrt());

	(0..count)
		.map(|i| {
			// y runs from 1 to -1; a lone point sits on the equator
			let y = if count > 1 {
				1.0 - (i as f64 / (count - 1) as f64) * 2.0
			} else {
				0.0
			};
			let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
			let theta = golden_angle * i as f64;

			let scaled = radius * rng.gen_range(1.0 - RADIUS_JITTER..1.0 + RADIUS_JITTER);
			let offset = Vec3::new(
				theta.cos() * radius_at_y * scaled,
				y * scaled * Y_FLATTEN,
				theta.sin() * radius_at_y * scaled,
			);
			bounds.clamp(center + offset)
		})
		.collect()
}
