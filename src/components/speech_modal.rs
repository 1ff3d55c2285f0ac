use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use crate::api;
use crate::session::{Speech, SpeechFile};

#[derive(Clone, Debug, PartialEq)]
enum SpeechState {
	Loading,
	Loaded(SpeechFile),
	Failed,
}

const NOT_INFORMED: &str = "Não informado";

fn speech_entry(speech: Speech) -> impl IntoView {
	let date = speech.formatted_date().unwrap_or_else(|| NOT_INFORMED.to_string());
	let kind = speech.kind().unwrap_or(NOT_INFORMED).to_string();
	let summary = speech.summary().unwrap_or(NOT_INFORMED).to_string();
	let link = speech.url_texto.map(|url| {
		view! {
			<a href=url target="_blank" rel="noopener noreferrer">
				"Ler íntegra no Diário da Câmara"
			</a>
		}
	});

	view! {
		<div class="discurso">
			<p><strong>"Data: "</strong>{date}</p>
			<p><strong>"Tipo do Discurso: "</strong>{kind}</p>
			<p><strong>"Sumário: "</strong>{summary}</p>
			{link}
		</div>
	}
}

/// Overlay listing a politician's speeches. `speaker` holds the display
/// name and the speech file URL; `None` closes the modal.
#[component]
pub fn SpeechModal(speaker: RwSignal<Option<(String, String)>>) -> impl IntoView {
	let content = RwSignal::new(SpeechState::Loading);

	Effect::new(move |_| {
		let Some((_, url)) = speaker.get() else {
			return;
		};
		content.set(SpeechState::Loading);
		spawn_local(async move {
			let fetched = api::fetch_speeches(&url).await;
			let still_open = speaker
				.try_with_untracked(|s| s.as_ref().is_some_and(|(_, open)| *open == url))
				.unwrap_or(false);
			if !still_open {
				return;
			}
			content.set(match fetched {
				Ok(file) => SpeechState::Loaded(file),
				Err(err) => {
					error!("failed to load speeches: {err}");
					SpeechState::Failed
				}
			});
		});
	});

	let title = move || {
		speaker.with(|s| {
			s.as_ref()
				.map(|(name, _)| format!("Discursos de {name}"))
				.unwrap_or_default()
		})
	};

	let body = move || match content.get() {
		SpeechState::Loading => view! { <p>"Carregando..."</p> }.into_any(),
		SpeechState::Failed => {
			view! { <p class="error">"Ocorreu um erro ao carregar os discursos."</p> }.into_any()
		}
		SpeechState::Loaded(file) if file.discursos.is_empty() => {
			view! { <p>"Nenhum discurso encontrado."</p> }.into_any()
		}
		SpeechState::Loaded(file) => file
			.discursos
			.into_iter()
			.map(speech_entry)
			.collect_view()
			.into_any(),
	};

	view! {
		<Show when=move || speaker.with(Option::is_some)>
			<div id="modal-overlay" class="modal-overlay" on:click=move |_| speaker.set(None)>
				<div class="modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
					<h2>{title}</h2>
					<button id="modal-close" on:click=move |_| speaker.set(None)>"×"</button>
					<div id="discursos-content">{body}</div>
				</div>
			</div>
		</Show>
	}
}
