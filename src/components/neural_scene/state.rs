use std::collections::HashSet;

use crate::layout::{Category, NeuralNetworkData, Vec3};

use super::camera::{OrbitCamera, Projected};

pub const PROJECT_COLOR: &str = "#3b82f6";
pub const BLOG_COLOR: &str = "#22c55e";

/// Node radius in world units.
pub const NODE_RADIUS: f64 = 0.35;
pub const MIN_NODE_PX: f64 = 3.0;
/// Extra pixels around a node that still count as a hit.
pub const HIT_SLOP: f64 = 6.0;
/// Pointer travel below which a press counts as a click.
pub const CLICK_SLOP: f64 = 4.0;

const AUTO_ROTATE_SPEED: f64 = 0.08;

/// Seconds a hover must last before its highlight starts to fade in.
const HOVER_DELAY: f64 = 0.08;
const FADE_IN_RATE: f64 = 1.8;
const FADE_OUT_RATE: f64 = 1.26;
/// Highlight levels below this snap to zero.
const FADE_FLOOR: f64 = 0.01;

#[derive(Clone, Debug)]
pub struct SceneNode {
	pub id: String,
	pub title: String,
	pub color: &'static str,
	pub world: Vec3,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub last_x: f64,
	pub last_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PinchState {
	pub active: bool,
	pub last_span: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

impl HoverState {
	/// Point the highlight at `node`. Leaving a node keeps it as `prev_*` so
	/// the highlight can fade out instead of vanishing.
	fn retarget(&mut self, node: Option<usize>, neighbors: HashSet<usize>) {
		match (self.node, node) {
			(Some(_), None) => {
				self.prev_node = self.node.take();
				self.prev_neighbors = std::mem::take(&mut self.neighbors);
				return;
			}
			(None, Some(_)) => self.delay_t = 0.0,
			_ => {}
		}
		self.prev_node = None;
		self.prev_neighbors.clear();
		self.node = node;
		self.neighbors = neighbors;
	}

	/// Ease `highlight_t` toward 1 while hovering and toward 0 afterwards.
	fn fade(&mut self, dt: f64) {
		if self.node.is_some() {
			self.delay_t = (self.delay_t + dt).min(HOVER_DELAY);
			if self.delay_t >= HOVER_DELAY {
				self.highlight_t += (1.0 - self.highlight_t) * FADE_IN_RATE * dt;
			}
			return;
		}

		self.highlight_t -= self.highlight_t * FADE_OUT_RATE * dt;
		if self.highlight_t < FADE_FLOOR {
			self.highlight_t = 0.0;
			self.prev_node = None;
			self.prev_neighbors.clear();
		}
	}

	fn covers(&self, idx: usize) -> bool {
		self.node == Some(idx)
			|| self.neighbors.contains(&idx)
			|| self.prev_node == Some(idx)
			|| self.prev_neighbors.contains(&idx)
	}
}

pub struct SceneState {
	pub nodes: Vec<SceneNode>,
	/// `(from, to, strength)` by node index.
	pub edges: Vec<(usize, usize, f64)>,
	pub camera: OrbitCamera,
	pub drag: DragState,
	pub pinch: PinchState,
	pub hover: HoverState,
	pub selected: Option<usize>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	pub reduced_effects: bool,
	/// Multiplier on edge strength when drawing.
	pub edge_weight: f64,
	center: Vec3,
	projected: Vec<Option<Projected>>,
}

impl SceneState {
	pub fn new(data: &NeuralNetworkData, width: f64, height: f64, edge_weight: f64) -> Self {
		let nodes: Vec<SceneNode> = data
			.nodes
			.iter()
			.map(|node| SceneNode {
				id: node.id.clone(),
				title: node.title.clone(),
				color: match node.category {
					Category::Project => PROJECT_COLOR,
					Category::Blog => BLOG_COLOR,
				},
				world: node.position,
			})
			.collect();

		let index_of = |id: &str| nodes.iter().position(|n| n.id == id);
		let edges = data
			.connections
			.iter()
			.filter_map(|e| Some((index_of(&e.from)?, index_of(&e.to)?, e.strength)))
			.collect();

		let center = data.bounds.center();
		let mut camera = OrbitCamera::default();
		camera.target = center;
		camera.reset(center);

		let mut state = Self {
			nodes,
			edges,
			camera,
			drag: DragState::default(),
			pinch: PinchState::default(),
			hover: HoverState::default(),
			selected: None,
			width,
			height,
			flow_time: 0.0,
			reduced_effects: false,
			edge_weight,
			center,
			projected: Vec::new(),
		};
		state.reproject();
		state
	}

	pub fn projected(&self, idx: usize) -> Option<Projected> {
		self.projected.get(idx).copied().flatten()
	}

	pub fn node_radius_px(&self, p: &Projected) -> f64 {
		(NODE_RADIUS * p.scale).max(MIN_NODE_PX)
	}

	/// Visible node indices, furthest first.
	pub fn draw_order(&self) -> Vec<usize> {
		let mut order: Vec<usize> = (0..self.nodes.len())
			.filter(|&i| self.projected(i).is_some())
			.collect();
		order.sort_by(|&a, &b| {
			let (da, db) = (self.projected[a].map(|p| p.depth), self.projected[b].map(|p| p.depth));
			db.partial_cmp(&da).unwrap_or(std::cmp::Ordering::Equal)
		});
		order
	}

	/// Front-most node under the pointer.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		self.draw_order().into_iter().rev().find(|&idx| {
			self.projected(idx).is_some_and(|p| {
				let (dx, dy) = (p.x - sx, p.y - sy);
				(dx * dx + dy * dy).sqrt() < self.node_radius_px(&p) + HIT_SLOP
			})
		})
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	fn neighbors_of(&self, idx: usize) -> HashSet<usize> {
		self.edges
			.iter()
			.filter_map(|&(src, tgt, _)| {
				if src == idx {
					Some(tgt)
				} else if tgt == idx {
					Some(src)
				} else {
					None
				}
			})
			.collect()
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node != node {
			let neighbors = node.map(|idx| self.neighbors_of(idx)).unwrap_or_default();
			self.hover.retarget(node, neighbors);
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.covers(idx) || self.selected == Some(idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Select a node by id and point the camera at it, or return to the overview.
	pub fn select(&mut self, id: Option<&str>) {
		self.selected = id.and_then(|id| self.index_of(id));
		match self.selected {
			Some(idx) => self.camera.focus_on(self.nodes[idx].world),
			None => self.camera.reset(self.center),
		}
	}

	pub fn begin_drag(&mut self, x: f64, y: f64) {
		self.drag = DragState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			last_x: x,
			last_y: y,
		};
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			return;
		}
		self.camera.orbit(x - self.drag.last_x, y - self.drag.last_y);
		self.drag.last_x = x;
		self.drag.last_y = y;
		let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
		if (dx * dx + dy * dy).sqrt() > CLICK_SLOP {
			self.drag.moved = true;
		}
		self.reproject();
	}

	/// Finish a drag. Returns true when it was a click rather than an orbit.
	pub fn end_drag(&mut self) -> bool {
		let was_click = self.drag.active && !self.drag.moved;
		self.drag = DragState::default();
		was_click
	}

	pub fn zoom(&mut self, factor: f64) {
		self.camera.zoom(factor);
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		let idle = !self.drag.active && !self.pinch.active && self.hover.node.is_none();
		if idle && self.selected.is_none() {
			self.camera.yaw += AUTO_ROTATE_SPEED * dt;
		}
		self.camera.ease(dt);
		self.reproject();
		self.hover.fade(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.reproject();
	}

	fn reproject(&mut self) {
		let (camera, width, height) = (&self.camera, self.width, self.height);
		self.projected = self
			.nodes
			.iter()
			.map(|node| camera.project(node.world, width, height))
			.collect();
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::layout::{BlogRecord, LayoutConfig, ProjectRecord, generate_neural_positions};

	fn scene() -> SceneState {
		let projects: Vec<ProjectRecord> = serde_json::from_str(
			r#"[
				{ "id": 1, "title": "A", "tech_stack": ["Rust", "WebGL"] },
				{ "id": 2, "title": "B", "tech_stack": ["rust", "webgl"] },
				{ "id": 3, "title": "C", "tech_stack": ["Go"] }
			]"#,
		)
		.unwrap();
		let blogs: Vec<BlogRecord> =
			serde_json::from_str(r#"[{ "id": 1, "title": "Notes" }]"#).unwrap();
		let mut rng = SmallRng::seed_from_u64(7);
		let data =
			generate_neural_positions(&projects, &blogs, &LayoutConfig::default(), &mut rng)
				.unwrap();
		SceneState::new(&data, 800.0, 600.0, 0.7)
	}

	#[test]
	fn edges_resolve_to_indices() {
		let s = scene();
		assert_eq!(s.nodes.len(), 4);
		assert_eq!(s.edges.len(), 1);
		assert_eq!((s.edges[0].0, s.edges[0].1), (0, 1));
		assert_eq!(s.nodes[3].color, BLOG_COLOR);
	}

	#[test]
	fn pointer_on_a_node_hits_it() {
		let s = scene();
		let idx = s.draw_order()[0];
		let p = s.projected(idx).unwrap();
		let hit = s.node_at_position(p.x, p.y).unwrap();
		// another node may overlap in front; either way the hit sits under the pointer
		let q = s.projected(hit).unwrap();
		assert!(((q.x - p.x).powi(2) + (q.y - p.y).powi(2)).sqrt() < s.node_radius_px(&q) + HIT_SLOP);
		assert!(q.depth <= p.depth);
	}

	#[test]
	fn empty_space_hits_nothing() {
		let s = scene();
		assert_eq!(s.node_at_position(-1000.0, -1000.0), None);
	}

	#[test]
	fn hover_collects_neighbors_and_fades_out() {
		let mut s = scene();
		s.set_hover(Some(0));
		assert!(s.hover.neighbors.contains(&1));
		assert!(s.is_highlighted(1));
		assert!(!s.is_highlighted(2));

		s.set_hover(None);
		assert_eq!(s.hover.prev_node, Some(0));
		for _ in 0..600 {
			s.tick(0.016);
		}
		assert!(!s.has_active_highlight());
	}

	#[test]
	fn highlight_waits_for_hover_delay_then_fades_in() {
		let mut hover = HoverState::default();
		hover.retarget(Some(2), HashSet::from([3]));
		hover.fade(HOVER_DELAY / 2.0);
		assert_eq!(hover.highlight_t, 0.0);

		for _ in 0..300 {
			hover.fade(0.016);
		}
		assert!(hover.highlight_t > 0.9);
		assert!(hover.covers(3));
	}

	#[test]
	fn moving_between_nodes_drops_the_old_highlight() {
		let mut hover = HoverState::default();
		hover.retarget(Some(0), HashSet::from([1]));
		hover.retarget(Some(2), HashSet::new());
		assert_eq!(hover.prev_node, None);
		assert!(!hover.covers(1));

		hover.retarget(None, HashSet::new());
		assert_eq!(hover.prev_node, Some(2));
		assert!(hover.covers(2));
	}

	#[test]
	fn short_press_is_a_click_long_drag_is_not() {
		let mut s = scene();
		s.begin_drag(10.0, 10.0);
		s.drag_to(11.0, 11.0);
		assert!(s.end_drag());

		s.begin_drag(10.0, 10.0);
		s.drag_to(80.0, 10.0);
		assert!(!s.end_drag());
	}

	#[test]
	fn selecting_unknown_id_clears_selection() {
		let mut s = scene();
		s.select(Some("project-2"));
		assert_eq!(s.selected, Some(1));
		s.select(Some("project-404"));
		assert_eq!(s.selected, None);
	}
}
