use leptos::prelude::*;

use crate::layout::{ContentSource, NeuralNetworkData, project_tags};

/// Details for the selected node. Hidden when nothing is selected.
#[component]
pub fn Sidebar(
	#[prop(into)] data: Signal<NeuralNetworkData>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let details = move || {
		let id = selected.get()?;
		let node = data.with(|d| d.node(&id).cloned())?;
		let related = data.with(|d| {
			d.neighbors(&id)
				.filter_map(|other| d.node(other).map(|n| n.title.clone()))
				.collect::<Vec<_>>()
		});

		let body = match &node.item.source {
			ContentSource::Project(project) => {
				let tags = project_tags(project).to_vec();
				let links = [("Source", project.github_url.clone()), ("Live demo", project.live_demo.clone())]
					.into_iter()
					.filter_map(|(label, url)| url.map(|url| view! { <a href=url target="_blank" rel="noopener">{label}</a> }))
					.collect_view();
				view! {
					<p>{project.description.clone().unwrap_or_default()}</p>
					<ul class="sidebar__tags">
						{tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
					</ul>
					<div class="sidebar__links">{links}</div>
				}
				.into_any()
			}
			ContentSource::Blog(blog) => view! {
				<p class="sidebar__summary">{blog.summary.clone().unwrap_or_default()}</p>
				<p>{blog.content.clone().unwrap_or_default()}</p>
				<p class="sidebar__date">{blog.created_at.clone().unwrap_or_default()}</p>
			}
			.into_any(),
		};

		Some(view! {
			<aside class="sidebar">
				<button class="sidebar__close" on:click=move |_| selected.set(None)>"×"</button>
				<span class="sidebar__type">{node.category.as_str()}</span>
				<h2>{node.title.clone()}</h2>
				{body}
				{(!related.is_empty()).then(|| view! { <h3>"Related"</h3> })}
				<ul class="sidebar__related">
					{related.iter().map(|title| view! { <li>{title.clone()}</li> }).collect_view()}
				</ul>
			</aside>
		})
	};

	view! { {details} }
}
