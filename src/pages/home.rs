use leptos::prelude::*;
use log::warn;
use serde::Deserialize;

use crate::components::neural_scene::NeuralScene;
use crate::layout::{BlogRecord, ProjectRecord};

/// Content shipped with the app until it is fetched from the API.
const CATALOG_JSON: &str = include_str!("../../content/catalog.json");

#[derive(Debug, Deserialize)]
struct Catalog {
	#[serde(default)]
	projects: Vec<ProjectRecord>,
	#[serde(default)]
	blogs: Vec<BlogRecord>,
}

fn load_catalog(json: &str) -> Result<Catalog, serde_json::Error> {
	serde_json::from_str(json).inspect_err(|err| warn!("failed to parse content catalog: {err}"))
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let catalog = load_catalog(CATALOG_JSON).map(|catalog| {
		let projects = Signal::stored(catalog.projects);
		let blogs = Signal::stored(catalog.blogs);

		view! {
			<div class="fullscreen-graph">
				<NeuralScene projects=projects blogs=blogs />
				<div class="graph-overlay">
					<h1>"Projects & Writing"</h1>
					<p class="subtitle">"Drag to orbit. Scroll to zoom. Click a node for details."</p>
				</div>
			</div>
		}
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{catalog}
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::layout::{LayoutConfig, generate_neural_positions};

	#[test]
	fn bundled_catalog_parses_and_lays_out() {
		let catalog = load_catalog(CATALOG_JSON).unwrap();
		assert_eq!(catalog.projects.len(), 5);
		assert_eq!(catalog.blogs.len(), 3);

		let mut rng = SmallRng::seed_from_u64(11);
		let data = generate_neural_positions(
			&catalog.projects,
			&catalog.blogs,
			&LayoutConfig::default(),
			&mut rng,
		)
		.unwrap();
		assert_eq!(data.nodes.len(), 8);
		// identical stacks under either field name
		assert!(data.neighbors("project-1").any(|id| id == "project-5"));
	}

	#[test]
	fn missing_sections_default_to_empty() {
		let catalog = load_catalog("{}").unwrap();
		assert!(catalog.projects.is_empty() && catalog.blogs.is_empty());
	}

	#[test]
	fn malformed_catalog_is_an_error() {
		assert!(load_catalog(r#"{ "projects": [{ "title": "no id" }] }"#).is_err());
	}
}
