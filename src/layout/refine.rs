use std::collections::HashMap;

use super::config::LayoutConfig;
use super::types::{Edge, Node, Vec3};

/// Relax node positions with a fixed number of spring-embedder iterations.
///
/// Pairs closer than `min_distance` push apart, edges pull their endpoints
/// together by `strength`. Every iteration ends with a clamp into the bounds.
/// There is no convergence check.
pub fn refine_positions(nodes: &mut [Node], edges: &[Edge], config: &LayoutConfig) {
	let index: HashMap<&str, usize> = nodes
		.iter()
		.enumerate()
		.map(|(i, n)| (n.id.as_str(), i))
		.collect();
	let springs: Vec<(usize, usize, f64)> = edges
		.iter()
		.filter_map(|e| Some((*index.get(e.from.as_str())?, *index.get(e.to.as_str())?, e.strength)))
		.collect();

	let mut positions: Vec<Vec3> = nodes.iter().map(|n| n.position).collect();
	relax(&mut positions, &springs, config);

	for (node, position) in nodes.iter_mut().zip(positions) {
		node.position = position;
	}
}

fn relax(positions: &mut [Vec3], springs: &[(usize, usize, f64)], config: &LayoutConfig) {
	let n = positions.len();
	let mut forces = vec![Vec3::ZERO; n];

	for _ in 0..config.iterations {
		forces.fill(Vec3::ZERO);

		for i in 0..n {
			for j in (i + 1)..n {
				let delta = positions[i] - positions[j];
				let distance = delta.length();
				if distance > 0.0 && distance < config.min_distance {
					let push = (config.min_distance - distance) / distance * config.repulsion;
					forces[i] += delta * push;
					forces[j] -= delta * push;
				}
			}
		}

		for &(from, to, strength) in springs {
			let delta = positions[to] - positions[from];
			let pull = strength * config.attraction;
			forces[from] += delta * pull;
			forces[to] -= delta * pull;
		}

		for (position, force) in positions.iter_mut().zip(&forces) {
			*position = config.bounds.clamp(*position + *force * config.damping);
		}
	}
}
