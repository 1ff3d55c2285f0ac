use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Página não encontrada"</h1>
			<a href="/">"Voltar ao grafo"</a>
		</div>
	}
}
