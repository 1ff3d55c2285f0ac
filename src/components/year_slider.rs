use leptos::prelude::*;
use log::warn;

use crate::session::{Explorer, LoadTicket};

/// Year entry, slider and prev/next stepping over the published years.
#[component]
pub fn YearSlider(
	explorer: RwSignal<Explorer>,
	load: Callback<LoadTicket>,
	notice: RwSignal<Option<String>>,
) -> impl IntoView {
	let current_year = move || explorer.with(|e| e.cursor().current().to_string());
	let current_index = move || explorer.with(|e| e.cursor().index());
	let (first, last, max_index) = explorer.with_untracked(|e| {
		let years = e.cursor().years();
		(
			years.first().cloned().unwrap_or_default(),
			years.last().cloned().unwrap_or_default(),
			years.len().saturating_sub(1),
		)
	});

	let invalid_entry = format!("Ano inválido. Digite um ano entre {first} e {last}.");
	let on_entry = move |ev| {
		let value = event_target_value(&ev);
		match explorer.try_update(|e| e.request_year(&value)) {
			Some(Ok(ticket)) => load.run(ticket),
			Some(Err(err)) => {
				warn!("rejected year entry: {err}");
				notice.set(Some(invalid_entry.clone()));
			}
			None => {}
		}
	};

	let on_slide = move |ev| {
		let Ok(index) = event_target_value(&ev).parse::<usize>() else {
			return;
		};
		if let Some(Ok(ticket)) = explorer.try_update(|e| e.request_index(index)) {
			load.run(ticket);
		}
	};

	let step = move |delta: isize| {
		if let Some(ticket) = explorer.try_update(|e| e.step_year(delta)).flatten() {
			load.run(ticket);
		}
	};

	view! {
		<div class="year-slider">
			<div class="year-row">
				<span class="year-label">"Ano:"</span>
				<input
					type="number"
					min=first
					max=last
					prop:value=current_year
					on:change=on_entry
				/>
			</div>
			<input
				type="range"
				min="0"
				max=max_index.to_string()
				step="1"
				prop:value=move || current_index().to_string()
				on:change=on_slide
			/>
			<div class="year-buttons">
				<button on:click=move |_| step(-1)>"◀"</button>
				<button on:click=move |_| step(1)>"▶"</button>
			</div>
		</div>
	}
}
