use leptos::prelude::*;

use super::log_failure;
use crate::session::Explorer;

/// Dropdown with one checkbox per community of the active session.
#[component]
pub fn CommunityFilter(explorer: RwSignal<Explorer>) -> impl IntoView {
	let communities = explorer.with_untracked(|e| {
		e.session()
			.map(|s| s.communities().available().to_vec())
			.unwrap_or_default()
	});
	let open = RwSignal::new(false);

	let options = communities
		.into_iter()
		.map(|community| {
			let checked = move || {
				explorer.with(|e| {
					e.session()
						.is_some_and(|s| s.communities().is_selected(community))
				})
			};
			let on_change = move |ev| {
				let selected = event_target_checked(&ev);
				explorer.update(|e| {
					log_failure(
						"community filter",
						e.on_community_toggle(community, selected),
					)
				});
			};
			view! {
				<label class="community-option">
					<input type="checkbox" prop:checked=checked on:change=on_change />
					{format!("Comunidade {community}")}
				</label>
			}
		})
		.collect_view();

	view! {
		<div id="comunidadeContainer" class="community-filter">
			<button on:click=move |_| open.update(|o| *o = !*o)>"Comunidades"</button>
			<div
				class="community-options"
				style:display=move || if open.get() { "grid" } else { "none" }
			>
				{options}
			</div>
		</div>
	}
}
