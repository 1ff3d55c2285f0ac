use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use crate::api;
use crate::components::community_filter::CommunityFilter;
use crate::components::force_graph::ForceGraphCanvas;
use crate::components::notice::Notice;
use crate::components::party_controls::PartyControls;
use crate::components::reset_button::ResetButton;
use crate::components::search_bar::SearchBar;
use crate::components::speech_modal::SpeechModal;
use crate::components::year_slider::YearSlider;
use crate::config::ViewerConfig;
use crate::session::{Explorer, LoadTicket};

/// Explorer page: full-window graph with the filter widgets on top.
#[component]
pub fn Home() -> impl IntoView {
	let explorer = RwSignal::new(Explorer::new(ViewerConfig::default()));
	let notice = RwSignal::new(None::<String>);
	let speaker = RwSignal::new(None::<(String, String)>);
	let session_id = Memo::new(move |_| explorer.with(|e| e.session().map(|s| s.id())));

	let load = Callback::new(move |ticket: LoadTicket| {
		spawn_local(async move {
			let fetched = api::fetch_dataset(ticket.url()).await;
			let year = ticket.year().to_string();
			if let Some(Err(err)) = explorer.try_update(|e| e.finish_load(ticket, fetched)) {
				notice.set(Some(format!("Erro ao carregar o grafo de {year}: {err}")));
			}
		});
	});

	spawn_local(async move {
		let Some(url) = explorer.try_with_untracked(|e| e.config().speech_index_url.clone()) else {
			return;
		};
		let fetched = api::fetch_speech_index(&url).await;
		if let Some(Err(_)) = explorer.try_update(|e| e.set_speech_index(fetched)) {
			notice.set(Some(
				"Atenção: A funcionalidade de exibir discursos pode não funcionar.".into(),
			));
		}
		if let Some(ticket) = explorer.try_update(|e| e.reload()) {
			load.run(ticket);
		}
	});

	let on_node_click = Callback::new(move |index: usize| {
		match explorer.with_untracked(|e| e.speech_file_for(index)) {
			Some(target) => speaker.set(Some(target)),
			None => {
				let name = explorer.with_untracked(|e| {
					e.session()
						.and_then(|s| s.store().node_at(index))
						.map(|n| n.label().to_string())
						.unwrap_or_default()
				});
				info!("no speech file mapped for {name}");
				notice.set(Some(format!("Nenhum discurso encontrado para {name}.")));
			}
		}
	});

	// session widgets are rebuilt from scratch on every load
	let session_controls = move || {
		session_id.get().map(|_| {
			view! {
				<SearchBar explorer=explorer />
				<CommunityFilter explorer=explorer />
				<PartyControls explorer=explorer />
			}
		})
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<ForceGraphCanvas explorer=explorer on_node_click=on_node_click fullscreen=true />
				<div class="graph-overlay">
					{session_controls}
					<ResetButton explorer=explorer load=load />
					<YearSlider explorer=explorer load=load notice=notice />
					<Notice message=notice />
				</div>
				<SpeechModal speaker=speaker />
			</div>
		</ErrorBoundary>
	}
}
