use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Page not found"</h1>
			<p>"Nothing lives at this address."</p>
			<a href="/">"Back to the network"</a>
		</div>
	}
}
