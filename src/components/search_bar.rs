use leptos::prelude::*;

use super::log_failure;
use crate::session::Explorer;

/// Free-text name search. Mounted once per session, so it starts empty.
#[component]
pub fn SearchBar(explorer: RwSignal<Explorer>) -> impl IntoView {
	let on_input = move |ev| {
		let query = event_target_value(&ev);
		explorer.update(|e| log_failure("search", e.on_search(&query)));
	};

	view! {
		<input
			id="buscaInput"
			class="search-bar"
			type="text"
			placeholder="Buscar por nome..."
			on:input=on_input
		/>
	}
}
