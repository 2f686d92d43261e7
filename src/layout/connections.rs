use std::collections::HashSet;

use super::config::LayoutConfig;
use super::similarity::{jaccard, keyword_set, tag_set};
use super::types::{Category, Edge, Node};

/// Build weighted edges between related nodes.
///
/// Project to blog pairs are scored on keyword overlap, project to project
/// pairs on tech-stack overlap (dampened). Blogs are never linked to each
/// other. Quadratic in the number of nodes.
pub fn build_connections(nodes: &[Node], config: &LayoutConfig) -> Vec<Edge> {
	let keywords: Vec<HashSet<String>> = nodes.iter().map(|n| keyword_set(&n.item)).collect();
	let tags: Vec<HashSet<String>> = nodes.iter().map(|n| tag_set(&n.item.tags)).collect();
	let projects: Vec<usize> = indices_of(nodes, Category::Project);
	let blogs: Vec<usize> = indices_of(nodes, Category::Blog);

	let mut edges = Vec::new();

	for &p in &projects {
		for &b in &blogs {
			let similarity = jaccard(&keywords[p], &keywords[b]);
			if similarity > config.project_blog_threshold {
				edges.push(Edge {
					from: nodes[p].id.clone(),
					to: nodes[b].id.clone(),
					strength: similarity.clamp(0.0, 1.0),
				});
			}
		}
	}

	for (i, &a) in projects.iter().enumerate() {
		for &b in &projects[i + 1..] {
			let similarity = jaccard(&tags[a], &tags[b]);
			if similarity > config.project_project_threshold {
				edges.push(Edge {
					from: nodes[a].id.clone(),
					to: nodes[b].id.clone(),
					strength: (similarity * config.project_project_dampening).clamp(0.0, 1.0),
				});
			}
		}
	}

	edges
}

fn indices_of(nodes: &[Node], category: Category) -> Vec<usize> {
	nodes
		.iter()
		.enumerate()
		.filter(|(_, n)| n.category == category)
		.map(|(i, _)| i)
		.collect()
}
