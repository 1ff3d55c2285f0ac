use leptos::prelude::*;

use crate::session::{Explorer, LoadTicket};

/// Rebuilds the current year from a fresh fetch.
#[component]
pub fn ResetButton(explorer: RwSignal<Explorer>, load: Callback<LoadTicket>) -> impl IntoView {
	let on_click = move |_| {
		if let Some(ticket) = explorer.try_update(|e| e.reload()) {
			load.run(ticket);
		}
	};

	view! { <button class="reset-button" on:click=on_click>"Recriar"</button> }
}
