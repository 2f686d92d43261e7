use serde::Deserialize;

use super::error::{LayoutError, LayoutResult};
use super::types::{LayoutBounds, Vec3};

/// Tunables for one layout run. Every field has a default, so a partial JSON
/// object is enough to override a few of them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Every position is clamped into these.
	pub bounds: LayoutBounds,
	/// Pairs closer than this repel each other.
	pub min_distance: f64,
	/// Spiral radius of the project cluster.
	pub cluster_separation: f64,
	/// Visual weight multiplier renderers apply to edge strength.
	pub connection_strength: f64,
	/// Spiral center of the project cluster.
	pub project_center: Vec3,
	/// Spiral center of the blog cluster.
	pub blog_center: Vec3,
	/// Blog spiral radius as a fraction of `cluster_separation`.
	pub blog_radius_factor: f64,
	/// Keyword similarity a project and blog must exceed to be linked.
	pub project_blog_threshold: f64,
	/// Tag similarity two projects must exceed to be linked.
	pub project_project_threshold: f64,
	/// Scales project to project edge strength.
	pub project_project_dampening: f64,
	/// Refinement passes.
	pub iterations: usize,
	/// Push applied to pairs inside `min_distance`.
	pub repulsion: f64,
	/// Pull applied along each edge, scaled by its strength.
	pub attraction: f64,
	/// Fraction of the accumulated force applied per pass.
	pub damping: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			bounds: LayoutBounds::default(),
			min_distance: 2.5,
			cluster_separation: 6.0,
			connection_strength: 0.7,
			project_center: Vec3::new(0.0, 2.0, 0.0),
			blog_center: Vec3::new(-3.0, -2.0, 3.0),
			blog_radius_factor: 0.8,
			project_blog_threshold: 0.3,
			project_project_threshold: 0.4,
			project_project_dampening: 0.8,
			iterations: 50,
			repulsion: 0.1,
			attraction: 0.05,
			damping: 0.8,
		}
	}
}

impl LayoutConfig {
	/// Spiral radius of the project cluster.
	pub fn project_radius(&self) -> f64 {
		self.cluster_separation
	}

	/// Spiral radius of the blog cluster.
	pub fn blog_radius(&self) -> f64 {
		self.cluster_separation * self.blog_radius_factor
	}

	/// Reject configurations the layout cannot honor: inverted bounds or
	/// negative / non-finite coefficients.
	pub fn validate(&self) -> LayoutResult<()> {
		for (axis, [min, max]) in self.bounds.axes() {
			if !(min.is_finite() && max.is_finite()) || min > max {
				return Err(LayoutError::InvertedBounds { axis });
			}
		}

		let params = [
			("min_distance", self.min_distance),
			("cluster_separation", self.cluster_separation),
			("connection_strength", self.connection_strength),
			("blog_radius_factor", self.blog_radius_factor),
			("project_blog_threshold", self.project_blog_threshold),
			("project_project_threshold", self.project_project_threshold),
			("project_project_dampening", self.project_project_dampening),
			("repulsion", self.repulsion),
			("attraction", self.attraction),
			("damping", self.damping),
		];
		for (name, value) in params {
			if !value.is_finite() || value < 0.0 {
				return Err(LayoutError::InvalidParameter { name });
			}
		}
		Ok(())
	}
}
