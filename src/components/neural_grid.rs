use leptos::prelude::*;

use crate::layout::{Category, NeuralNetworkData, Node};

/// Card grid used where the 3D scene is not rendered. Keeps the layout's node
/// order: projects first, then blogs.
#[component]
pub fn NeuralGrid(
	#[prop(into)] data: Signal<NeuralNetworkData>,
	#[prop(into)] selected: Signal<Option<String>>,
	#[prop(into)] on_select: Callback<Option<String>>,
) -> impl IntoView {
	view! {
		<div class="neural-grid">
			<For
				each=move || data.with(|d| d.nodes.clone())
				key=|node: &Node| node.id.clone()
				children=move |node: Node| {
					let id = node.id.clone();
					let is_selected = {
						let id = id.clone();
						move || selected.with(|s| s.as_deref() == Some(id.as_str()))
					};
					let is_project = node.category == Category::Project;
					let text = if node.item.descriptive_text.is_empty() {
						placeholder(node.category).to_string()
					} else {
						node.item.descriptive_text.clone()
					};
					view! {
						<button
							class="neural-card"
							class:selected=is_selected
							class:project=is_project
							class:blog={!is_project}
							on:click=move |_| on_select.run(Some(id.clone()))
						>
							<span class="neural-card__type">{node.category.as_str()}</span>
							<h3 class="neural-card__title">{node.title.clone()}</h3>
							<p class="neural-card__text">{text}</p>
						</button>
					}
				}
			/>
		</div>
	}
}

fn placeholder(category: Category) -> &'static str {
	match category {
		Category::Project => "Project description",
		Category::Blog => "Blog post summary",
	}
}
