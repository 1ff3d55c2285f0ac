use leptos::prelude::*;

use super::log_failure;
use crate::session::Explorer;

/// Party coloring toggle plus a legend of the session's party colors.
#[component]
pub fn PartyControls(explorer: RwSignal<Explorer>) -> impl IntoView {
	let legend = explorer.with_untracked(|e| {
		e.session()
			.map(|s| s.store().party_table().entries().to_vec())
			.unwrap_or_default()
	});
	let legend_open = RwSignal::new(false);

	let on_toggle = move |ev| {
		let enabled = event_target_checked(&ev);
		explorer.update(|e| log_failure("party overlay", e.on_party_mode(enabled)));
	};

	let rows = legend
		.into_iter()
		.map(|(party, color)| {
			view! {
				<div class="party-row">
					<span class="swatch" style:background=color.as_str()></span>
					{party}
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="party-controls">
			<input
				type="checkbox"
				id="partidoCheckbox"
				prop:checked=move || explorer.with(|e| e.session().is_some_and(|s| s.party_mode()))
				on:change=on_toggle
			/>
			<label for="partidoCheckbox" id="partidoLabel">"Veja por partidos"</label>
			<button id="toggleMenuPartidos" on:click=move |_| legend_open.update(|o| *o = !*o)>
				{move || if legend_open.get() { "Ocultar Partidos" } else { "Mostrar Partidos" }}
			</button>
			<div
				id="menuPartidos"
				style:display=move || if legend_open.get() { "block" } else { "none" }
			>
				{rows}
			</div>
		</div>
	}
}
