use leptos::prelude::*;
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::components::neural_grid::NeuralGrid;
use crate::components::sidebar::Sidebar;
use crate::device::use_device_capabilities;
use crate::layout::{BlogRecord, LayoutConfig, ProjectRecord, generate_neural_positions};

use super::component::NeuralCanvas;

/// Lays out projects and blogs, then shows them as a 3D scene or, on weaker
/// devices, as a grid. Layout errors surface to the nearest `ErrorBoundary`.
#[component]
pub fn NeuralScene(
	#[prop(into)] projects: Signal<Vec<ProjectRecord>>,
	#[prop(into)] blogs: Signal<Vec<BlogRecord>>,
	#[prop(optional)] config: Option<LayoutConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let edge_weight = config.connection_strength;

	let network = Memo::new(move |_| {
		let mut rng = SmallRng::from_entropy();
		projects.with(|projects| {
			blogs.with(|blogs| generate_neural_positions(projects, blogs, &config, &mut rng))
		})
	});
	let data = Signal::derive(move || network.get().unwrap_or_default());

	let capabilities = use_device_capabilities();
	let use_3d = Memo::new(move |_| capabilities.with(|c| c.should_use_3d()));
	let reduced_effects = Signal::derive(move || capabilities.with(|c| c.should_use_reduced_effects()));
	Effect::new(move |_| {
		let (caps, use_3d) = (capabilities.get(), use_3d.get());
		info!(
			"rendering {} view ({} screen, reduced effects: {})",
			if use_3d { "3D" } else { "2D" },
			caps.screen_size.as_str(),
			caps.should_use_reduced_effects()
		);
	});

	let selected = RwSignal::new(None::<String>);
	// A new layout invalidates the selection if its node is gone
	Effect::new(move |_| {
		data.with(|data| {
			let stale = selected.with_untracked(|id| id.as_deref().is_some_and(|id| data.node(id).is_none()));
			if stale {
				selected.set(None);
			}
		});
	});
	let on_select = Callback::new(move |id: Option<String>| selected.set(id));

	view! {
		{move || network.with(|result| result.as_ref().map(|_| ()).map_err(Clone::clone))}
		<div class="neural-scene">
			<Show
				when=move || use_3d.get()
				fallback=move || view! { <NeuralGrid data=data selected=selected on_select=on_select /> }
			>
				<NeuralCanvas
					data=data
					selected=selected
					on_select=on_select
					reduced_effects=reduced_effects
					edge_weight=edge_weight
				/>
			</Show>
			<Sidebar data=data selected=selected />
		</div>
	}
}
