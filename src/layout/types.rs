use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::sync::Arc;

use serde::Deserialize;

/// A point or displacement in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct Vec3 {
	/// Horizontal.
	pub x: f64,
	/// Vertical.
	pub y: f64,
	/// Depth.
	pub z: f64,
}

impl Vec3 {
	/// The origin.
	pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

	/// Vector from components.
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Euclidean norm.
	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
	}
}

impl From<[f64; 3]> for Vec3 {
	fn from([x, y, z]: [f64; 3]) -> Self {
		Self { x, y, z }
	}
}

impl Add for Vec3 {
	type Output = Vec3;

	fn add(self, rhs: Vec3) -> Vec3 {
		Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
	}
}

impl Sub for Vec3 {
	type Output = Vec3;

	fn sub(self, rhs: Vec3) -> Vec3 {
		Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
	}
}

impl Mul<f64> for Vec3 {
	type Output = Vec3;

	fn mul(self, rhs: f64) -> Vec3 {
		Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
	}
}

impl AddAssign for Vec3 {
	fn add_assign(&mut self, rhs: Vec3) {
		*self = *self + rhs;
	}
}

impl SubAssign for Vec3 {
	fn sub_assign(&mut self, rhs: Vec3) {
		*self = *self - rhs;
	}
}

/// Which content collection a node came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	/// Portfolio project.
	Project,
	/// Blog post.
	Blog,
}

impl Category {
	/// Lower-case name, used as the node id prefix.
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Project => "project",
			Category::Blog => "blog",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Record identifier as served by the content API: numeric or textual.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContentId {
	/// Numeric database id.
	Int(i64),
	/// Slug-like or UUID id.
	Text(String),
}

impl fmt::Display for ContentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ContentId::Int(id) => write!(f, "{id}"),
			ContentId::Text(id) => f.write_str(id.trim()),
		}
	}
}

/// A project as returned by the content API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectRecord {
	/// Database id.
	pub id: ContentId,
	/// Display title.
	pub title: String,
	/// URL slug.
	#[serde(default)]
	pub slug: Option<String>,
	/// Descriptive text; feeds keyword matching.
	#[serde(default)]
	pub description: Option<String>,
	/// Technologies used, snake_case field name.
	#[serde(default)]
	pub tech_stack: Option<Vec<String>>,
	/// Technologies used, camelCase field name. Read only when `tech_stack` is absent.
	#[serde(default, rename = "techStack")]
	pub tech_stack_camel: Option<Vec<String>>,
	/// Repository link.
	#[serde(default)]
	pub github_url: Option<String>,
	/// Live demo link.
	#[serde(default)]
	pub live_demo: Option<String>,
	/// Cover image.
	#[serde(default)]
	pub image_url: Option<String>,
	/// Creation timestamp as served.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// A blog post as returned by the content API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BlogRecord {
	/// Database id.
	pub id: ContentId,
	/// Display title.
	pub title: String,
	/// URL slug.
	#[serde(default)]
	pub slug: Option<String>,
	/// Short summary; feeds keyword matching.
	#[serde(default)]
	pub summary: Option<String>,
	/// Full post body.
	#[serde(default)]
	pub content: Option<String>,
	/// Publication timestamp as served.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// The raw record a [`ContentItem`] was built from, shared read-only with renderers.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentSource {
	/// From the projects collection.
	Project(Arc<ProjectRecord>),
	/// From the blogs collection.
	Blog(Arc<BlogRecord>),
}

/// Uniform shape of a project or blog post as seen by the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentItem {
	/// Stable string key of the source record.
	pub key: String,
	/// Display title.
	pub title: String,
	/// Source collection.
	pub category: Category,
	/// Description or summary, empty when absent.
	pub descriptive_text: String,
	/// Project tech stack; always empty for blogs.
	pub tags: Vec<String>,
	/// Record this item was built from.
	pub source: ContentSource,
}

impl ContentItem {
	/// Node id, `"{category}-{key}"`.
	pub fn node_id(&self) -> String {
		format!("{}-{}", self.category, self.key)
	}
}

/// A positioned content item.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// `"{category}-{key}"`, unique within a layout.
	pub id: String,
	/// Source collection.
	pub category: Category,
	/// Display title.
	pub title: String,
	/// Final position, inside the layout bounds.
	pub position: Vec3,
	/// Item the node was built from.
	pub item: Arc<ContentItem>,
}

/// Weighted, semantically undirected relation between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Node id of one endpoint; always a project.
	pub from: String,
	/// Node id of the other endpoint.
	pub to: String,
	/// In `[0, 1]`.
	pub strength: f64,
}

impl Edge {
	/// Whether `node_id` is either endpoint.
	pub fn touches(&self, node_id: &str) -> bool {
		self.from == node_id || self.to == node_id
	}
}

/// Closed intervals for each axis. Precondition: `axis[0] <= axis[1]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LayoutBounds {
	/// `[min, max]` on x.
	pub x: [f64; 2],
	/// `[min, max]` on y.
	pub y: [f64; 2],
	/// `[min, max]` on z.
	pub z: [f64; 2],
}

impl Default for LayoutBounds {
	fn default() -> Self {
		Self {
			x: [-12.0, 12.0],
			y: [-8.0, 8.0],
			z: [-10.0, 10.0],
		}
	}
}

impl LayoutBounds {
	/// Clamp each coordinate of `p` into its interval.
	pub fn clamp(&self, p: Vec3) -> Vec3 {
		Vec3::new(
			p.x.clamp(self.x[0], self.x[1]),
			p.y.clamp(self.y[0], self.y[1]),
			p.z.clamp(self.z[0], self.z[1]),
		)
	}

	/// Whether `p` lies inside on every axis, ends included.
	pub fn contains(&self, p: Vec3) -> bool {
		(self.x[0]..=self.x[1]).contains(&p.x)
			&& (self.y[0]..=self.y[1]).contains(&p.y)
			&& (self.z[0]..=self.z[1]).contains(&p.z)
	}

	/// Midpoint of the box.
	pub fn center(&self) -> Vec3 {
		Vec3::new(
			(self.x[0] + self.x[1]) / 2.0,
			(self.y[0] + self.y[1]) / 2.0,
			(self.z[0] + self.z[1]) / 2.0,
		)
	}

	pub(crate) fn axes(&self) -> [(&'static str, [f64; 2]); 3] {
		[("x", self.x), ("y", self.y), ("z", self.z)]
	}
}

/// Output of one layout run, handed to the rendering layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeuralNetworkData {
	/// Projects first, then blogs, each in input order.
	pub nodes: Vec<Node>,
	/// Edges between related nodes.
	pub connections: Vec<Edge>,
	/// Box every node position lies in.
	pub bounds: LayoutBounds,
}

impl NeuralNetworkData {
	/// Node with the given id.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Ids of every node sharing an edge with `id`.
	pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.connections
			.iter()
			.filter(move |edge| edge.touches(id))
			.map(move |edge| if edge.from == id { edge.to.as_str() } else { edge.from.as_str() })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edge(from: &str, to: &str) -> Edge {
		Edge {
			from: from.into(),
			to: to.into(),
			strength: 0.5,
		}
	}

	#[test]
	fn neighbors_follow_edges_in_both_directions() {
		let data = NeuralNetworkData {
			connections: vec![
				edge("project-1", "blog-1"),
				edge("project-2", "project-1"),
				edge("project-2", "blog-2"),
			],
			..NeuralNetworkData::default()
		};

		let mut around_one: Vec<&str> = data.neighbors("project-1").collect();
		around_one.sort();
		assert_eq!(around_one, ["blog-1", "project-2"]);
		assert_eq!(data.neighbors("blog-2").collect::<Vec<_>>(), ["project-2"]);
		assert_eq!(data.neighbors("blog-9").count(), 0);
	}
}
