//! Positions projects and blog posts in 3D space and links related ones.
//!
//! The pipeline is adapter → clusters → connections → force-directed
//! refinement. It is synchronous and keeps no state between runs.

mod adapter;
mod cluster;
mod config;
mod connections;
mod error;
mod keywords;
mod refine;
mod similarity;
mod types;

use std::sync::Arc;

use log::debug;
use rand::Rng;

pub use adapter::{adapt, project_tags};
pub use cluster::cluster_positions;
pub use config::LayoutConfig;
pub use connections::build_connections;
pub use error::{LayoutError, LayoutResult};
pub use keywords::extract_keywords;
pub use refine::refine_positions;
pub use similarity::{content_similarity, jaccard, tag_similarity};
pub use types::{
	BlogRecord, Category, ContentId, ContentItem, ContentSource, Edge, LayoutBounds,
	NeuralNetworkData, Node, ProjectRecord, Vec3,
};

/// Compute the full graph for one set of projects and blogs.
///
/// Connection building and repulsion compare every pair of nodes, so cost
/// grows quadratically; this is sized for catalogs of tens of items.
pub fn generate_neural_positions<R: Rng>(
	projects: &[ProjectRecord],
	blogs: &[BlogRecord],
	config: &LayoutConfig,
	rng: &mut R,
) -> LayoutResult<NeuralNetworkData> {
	config.validate()?;
	let items = adapt(projects, blogs)?;

	let project_spots = cluster_positions(
		projects.len(),
		config.project_center,
		config.project_radius(),
		&config.bounds,
		rng,
	);
	let blog_spots = cluster_positions(
		blogs.len(),
		config.blog_center,
		config.blog_radius(),
		&config.bounds,
		rng,
	);

	let mut nodes: Vec<Node> = items
		.into_iter()
		.zip(project_spots.into_iter().chain(blog_spots))
		.map(|(item, position)| Node {
			id: item.node_id(),
			category: item.category,
			title: item.title.clone(),
			position,
			item: Arc::new(item),
		})
		.collect();

	let connections = build_connections(&nodes, config);
	refine_positions(&mut nodes, &connections, config);

	debug!(
		"layout: {} projects, {} blogs, {} connections",
		projects.len(),
		blogs.len(),
		connections.len()
	);

	Ok(NeuralNetworkData {
		nodes,
		connections,
		bounds: config.bounds,
	})
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	const PROJECTS: &str = r#"[
		{
			"id": 1,
			"title": "Neural Mesh Reconstruction",
			"description": "Deep learning pipeline for reconstructing 3D meshes",
			"tech_stack": ["Python", "PyTorch", "Open3D"]
		},
		{
			"id": 2,
			"title": "Real-time Style Transfer",
			"description": "GPU-accelerated neural style transfer system",
			"tech_stack": ["C++", "CUDA", "OpenGL"]
		},
		{
			"id": "nerf",
			"title": "NeRF Scene Optimization",
			"description": "Optimized Neural Radiance Fields implementation",
			"techStack": ["python", "pytorch", "JAX"]
		}
	]"#;

	const BLOGS: &str = r#"[
		{
			"id": 1,
			"title": "Getting Started with NeRF",
			"summary": "A comprehensive guide to Neural Radiance Fields",
			"content": "Neural Radiance Fields have revolutionized..."
		},
		{ "id": 2, "title": "Untitled" }
	]"#;

	fn sample() -> (Vec<ProjectRecord>, Vec<BlogRecord>) {
		(
			serde_json::from_str(PROJECTS).unwrap(),
			serde_json::from_str(BLOGS).unwrap(),
		)
	}

	fn run(seed: u64) -> NeuralNetworkData {
		let (projects, blogs) = sample();
		let mut rng = SmallRng::seed_from_u64(seed);
		generate_neural_positions(&projects, &blogs, &LayoutConfig::default(), &mut rng).unwrap()
	}

	#[test]
	fn node_counts_partition_by_category() {
		let data = run(1);
		assert_eq!(data.nodes.len(), 5);
		let projects = data.nodes.iter().filter(|n| n.category == Category::Project);
		assert_eq!(projects.count(), 3);
		let blogs = data.nodes.iter().filter(|n| n.category == Category::Blog);
		assert_eq!(blogs.count(), 2);
		assert_eq!(data.nodes[2].id, "project-nerf");
		assert_eq!(data.nodes[3].id, "blog-1");
	}

	#[test]
	fn every_position_is_within_bounds() {
		for seed in 0..20 {
			let data = run(seed);
			assert!(data.nodes.iter().all(|n| data.bounds.contains(n.position)));
		}
	}

	#[test]
	fn edges_are_valid() {
		let data = run(2);
		assert!(!data.connections.is_empty());
		for edge in &data.connections {
			assert!((0.0..=1.0).contains(&edge.strength));
			let from = data.node(&edge.from).unwrap();
			let to = data.node(&edge.to).unwrap();
			assert!(!(from.category == Category::Blog && to.category == Category::Blog));
		}
	}

	#[test]
	fn mixed_tag_fields_still_link_projects() {
		let data = run(3);
		assert!(data.neighbors("project-1").any(|id| id == "project-nerf"));
		assert!(!data.neighbors("project-2").any(|id| id.starts_with("project-")));
	}

	#[test]
	fn same_seed_reproduces_layout() {
		assert_eq!(run(42), run(42));
	}

	#[test]
	fn empty_input_yields_empty_graph_with_bounds() {
		let mut rng = SmallRng::seed_from_u64(0);
		let config = LayoutConfig::default();
		let data = generate_neural_positions(&[], &[], &config, &mut rng).unwrap();
		assert!(data.nodes.is_empty());
		assert!(data.connections.is_empty());
		assert_eq!(data.bounds, config.bounds);
	}

	#[test]
	fn single_project_is_placed_in_bounds() {
		let (projects, _) = sample();
		let mut rng = SmallRng::seed_from_u64(5);
		let data =
			generate_neural_positions(&projects[..1], &[], &LayoutConfig::default(), &mut rng)
				.unwrap();
		assert_eq!(data.nodes.len(), 1);
		assert!(data.bounds.contains(data.nodes[0].position));
	}

	#[test]
	fn invalid_config_is_refused_before_layout() {
		let (projects, blogs) = sample();
		let mut config = LayoutConfig::default();
		config.bounds.x = [1.0, -1.0];
		let mut rng = SmallRng::seed_from_u64(0);
		assert_eq!(
			generate_neural_positions(&projects, &blogs, &config, &mut rng),
			Err(LayoutError::InvertedBounds { axis: "x" })
		);
	}
}
