use leptos::prelude::*;

/// Dismissable banner for non-fatal problems: failed loads, invalid year
/// entry, missing speech data.
#[component]
pub fn Notice(message: RwSignal<Option<String>>) -> impl IntoView {
	view! {
		<Show when=move || message.with(Option::is_some)>
			<div class="notice" role="alert">
				<span>{move || message.get().unwrap_or_default()}</span>
				<button class="notice-close" on:click=move |_| message.set(None)>"×"</button>
			</div>
		</Show>
	}
}
