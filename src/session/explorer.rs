//! The application controller: owns the active session and exposes the
//! message interface the UI (or a test) drives.

use std::collections::BTreeSet;

use log::{debug, error, info, warn};

use super::community::CommunityFilter;
use super::dataset::Dataset;
use super::party::PartyOverlay;
use super::search::SearchFilter;
use super::speech::SpeechIndex;
use super::store::GraphStore;
use super::years::YearCursor;
use crate::config::ViewerConfig;
use crate::error::Result;

/// One loaded year with its live presentation state.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
	id: u64,
	year: String,
	store: GraphStore,
	communities: CommunityFilter,
	search: SearchFilter,
	party: PartyOverlay,
}

impl Session {
	fn new(id: u64, year: String, dataset: &Dataset, config: &ViewerConfig) -> Result<Self> {
		let store = GraphStore::from_dataset(dataset, config)?;
		let communities = CommunityFilter::new(&store);
		Ok(Self {
			id,
			year,
			store,
			communities,
			search: SearchFilter::new(config.highlight_node_size),
			party: PartyOverlay::default(),
		})
	}

	/// Changes whenever a new dataset replaces the graph.
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Year this session was loaded from.
	pub fn year(&self) -> &str {
		&self.year
	}

	/// Graph and presentation state.
	pub fn store(&self) -> &GraphStore {
		&self.store
	}

	/// Community selection.
	pub fn communities(&self) -> &CommunityFilter {
		&self.communities
	}

	/// Last search.
	pub fn search(&self) -> &SearchFilter {
		&self.search
	}

	/// Whether nodes are colored by party.
	pub fn party_mode(&self) -> bool {
		self.party.is_enabled()
	}

	/// Lower-cases the raw input and reruns the search; returns the best match id.
	pub fn on_search(&mut self, query: &str) -> Result<Option<&str>> {
		let query = query.to_lowercase();
		self.search.search(&mut self.store, &query)
	}

	/// Replaces the selected communities; returns how many nodes changed.
	pub fn on_community_select(&mut self, ids: BTreeSet<u32>) -> Result<usize> {
		self.communities.set_selected_communities(&mut self.store, ids)
	}

	/// Checkbox for one community; returns how many nodes changed.
	pub fn on_community_toggle(&mut self, community: u32, selected: bool) -> Result<usize> {
		self.communities.toggle(&mut self.store, community, selected)
	}

	/// Party coloring switch; returns how many nodes changed color.
	pub fn on_party_mode(&mut self, enabled: bool) -> Result<usize> {
		self.party.set_party_mode_enabled(&mut self.store, enabled)
	}
}

/// Proof that a fetch was requested; only the newest one may be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
	generation: u64,
	year: String,
	url: String,
}

impl LoadTicket {
	/// Year being fetched.
	pub fn year(&self) -> &str {
		&self.year
	}

	/// Snapshot URL to fetch.
	pub fn url(&self) -> &str {
		&self.url
	}
}

/// What `finish_load` did with a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
	/// The response became the active session.
	Applied {
		/// Year now shown.
		year: String,
		/// Node count of the new store.
		nodes: usize,
		/// Edge count of the new store.
		edges: usize,
	},
	/// A newer request was issued while this one was in flight.
	Superseded,
}

/// Year navigation plus the active session. The UI sends every user
/// action here; fetches go out as [`LoadTicket`]s and come back through
/// [`Explorer::finish_load`].
#[derive(Clone, Debug, PartialEq)]
pub struct Explorer {
	config: ViewerConfig,
	cursor: YearCursor,
	session: Option<Session>,
	speeches: SpeechIndex,
	latest_request: u64,
	sessions_built: u64,
}

impl Explorer {
	/// No session until the first load finishes.
	pub fn new(config: ViewerConfig) -> Self {
		let cursor = YearCursor::new(config.years.clone());
		Self {
			config,
			cursor,
			session: None,
			speeches: SpeechIndex::default(),
			latest_request: 0,
			sessions_built: 0,
		}
	}

	/// Settings this explorer was built with.
	pub fn config(&self) -> &ViewerConfig {
		&self.config
	}

	/// Selected year.
	pub fn cursor(&self) -> &YearCursor {
		&self.cursor
	}

	/// Active session, `None` before the first successful load.
	pub fn session(&self) -> Option<&Session> {
		self.session.as_ref()
	}

	/// Mutable access to the active session.
	pub fn session_mut(&mut self) -> Option<&mut Session> {
		self.session.as_mut()
	}

	/// Moves the cursor to `year` and issues a ticket for its snapshot.
	pub fn request_year(&mut self, year: &str) -> Result<LoadTicket> {
		self.cursor.select(year)?;
		Ok(self.issue_ticket())
	}

	/// Slider drag.
	pub fn request_index(&mut self, index: usize) -> Result<LoadTicket> {
		self.cursor.select_index(index)?;
		Ok(self.issue_ticket())
	}

	/// Prev/next buttons; `None` at either end of the list.
	pub fn step_year(&mut self, delta: isize) -> Option<LoadTicket> {
		self.cursor.step(delta)?;
		Some(self.issue_ticket())
	}

	/// Reloads the cursor year from scratch.
	pub fn reload(&mut self) -> LoadTicket {
		self.issue_ticket()
	}

	/// Applies a finished fetch. Failures and superseded responses leave
	/// the current session exactly as it was.
	pub fn finish_load(&mut self, ticket: LoadTicket, fetched: Result<Dataset>) -> Result<LoadOutcome> {
		if ticket.generation != self.latest_request {
			debug!(
				"discarding response for {} (request #{}, latest #{})",
				ticket.year, ticket.generation, self.latest_request
			);
			return Ok(LoadOutcome::Superseded);
		}

		let session = fetched
			.and_then(|dataset| {
				Session::new(
					self.sessions_built + 1,
					ticket.year.clone(),
					&dataset,
					&self.config,
				)
			})
			.map_err(|err| {
				error!("failed to load graph for {}: {err}", ticket.year);
				err
			})?;

		self.sessions_built += 1;
		let outcome = LoadOutcome::Applied {
			year: ticket.year.clone(),
			nodes: session.store().len(),
			edges: session.store().edges().len(),
		};
		info!(
			"loaded {}: {} nodes, {} edges",
			ticket.year,
			session.store().len(),
			session.store().edges().len()
		);
		self.session = Some(session);
		Ok(outcome)
	}

	/// Installs the speech index. A failed fetch is logged and returned;
	/// speeches stay unavailable.
	pub fn set_speech_index(&mut self, fetched: Result<SpeechIndex>) -> Result<()> {
		match fetched {
			Ok(index) => {
				info!("speech index loaded: {} politicians", index.len());
				self.speeches = index;
				Ok(())
			}
			Err(err) => {
				warn!("speech index unavailable: {err}");
				Err(err)
			}
		}
	}

	/// Speech file for a node of the active session.
	pub fn speech_file_for(&self, node_index: usize) -> Option<(String, String)> {
		let node = self.session.as_ref()?.store().node_at(node_index)?;
		let file = self.speeches.file_for(node.label())?;
		Some((node.label().to_string(), self.config.speech_url(file)))
	}

	/// Search box input. The `on_*` handlers do nothing before the first load.
	pub fn on_search(&mut self, query: &str) -> Result<()> {
		self.with_session(|s| s.on_search(query).map(|_| ()))
	}

	/// Community checkbox.
	pub fn on_community_toggle(&mut self, community: u32, selected: bool) -> Result<()> {
		self.with_session(|s| s.on_community_toggle(community, selected).map(|_| ()))
	}

	/// Party mode checkbox.
	pub fn on_party_mode(&mut self, enabled: bool) -> Result<()> {
		self.with_session(|s| s.on_party_mode(enabled).map(|_| ()))
	}

	fn with_session(&mut self, f: impl FnOnce(&mut Session) -> Result<()>) -> Result<()> {
		match self.session.as_mut() {
			Some(session) => f(session),
			None => Ok(()),
		}
	}

	fn issue_ticket(&mut self) -> LoadTicket {
		self.latest_request += 1;
		let year = self.cursor.current().to_string();
		LoadTicket {
			generation: self.latest_request,
			url: self.config.dataset_url(&year),
			year,
		}
	}
}

impl Default for Explorer {
	fn default() -> Self {
		Self::new(ViewerConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::VizError;
	use crate::session::dataset::NodeRecord;

	fn dataset(names: &[&str]) -> Dataset {
		Dataset {
			nodes: names
				.iter()
				.enumerate()
				.map(|(i, name)| NodeRecord {
					id: format!("n{i}"),
					name: name.to_string(),
					party: "P".into(),
					strength: 0.0,
					community: i as u32,
				})
				.collect(),
			links: Vec::new(),
		}
	}

	#[test]
	fn events_before_first_load_are_ignored() {
		let mut explorer = Explorer::default();
		assert!(explorer.on_search("ana").is_ok());
		assert!(explorer.on_party_mode(true).is_ok());
		assert!(explorer.session().is_none());
	}

	#[test]
	fn only_the_latest_request_is_applied() {
		let mut explorer = Explorer::default();
		let slow = explorer.request_year("2018").unwrap();
		let fast = explorer.request_year("2019").unwrap();

		let applied = explorer.finish_load(fast, Ok(dataset(&["Ana"]))).unwrap();
		assert!(matches!(applied, LoadOutcome::Applied { nodes: 1, .. }));
		let outcome = explorer.finish_load(slow, Ok(dataset(&["Beto", "Caio"]))).unwrap();
		assert_eq!(outcome, LoadOutcome::Superseded);
		assert_eq!(explorer.session().unwrap().year(), "2019");
		assert_eq!(explorer.session().unwrap().store().len(), 1);
	}

	#[test]
	fn new_session_resets_filters() {
		let mut explorer = Explorer::default();
		let ticket = explorer.reload();
		explorer.finish_load(ticket, Ok(dataset(&["Ana", "Beto"]))).unwrap();
		let first_id = explorer.session().unwrap().id();
		explorer.on_party_mode(true).unwrap();
		explorer.on_community_toggle(0, false).unwrap();
		explorer.on_search("be").unwrap();

		let ticket = explorer.step_year(1).unwrap();
		assert_eq!(ticket.year(), "2018");
		assert_eq!(ticket.url(), "/public/2018.json");
		explorer.finish_load(ticket, Ok(dataset(&["Ana", "Beto"]))).unwrap();

		let session = explorer.session().unwrap();
		assert_ne!(session.id(), first_id);
		assert!(!session.party_mode());
		assert_eq!(session.search().query(), "");
		assert!(session.store().nodes().iter().all(|n| !n.attrs().hidden));
	}

	#[test]
	fn search_query_is_lowercased() {
		let mut explorer = Explorer::default();
		let ticket = explorer.reload();
		explorer.finish_load(ticket, Ok(dataset(&["Ana"]))).unwrap();
		let session = explorer.session_mut().unwrap();
		assert_eq!(session.on_search("ANA").unwrap(), Some("n0"));
	}

	#[test]
	fn speech_lookup_resolves_a_url() {
		let mut explorer = Explorer::default();
		let ticket = explorer.reload();
		explorer.finish_load(ticket, Ok(dataset(&["Ana Souza", "Beto"]))).unwrap();
		explorer
			.set_speech_index(Ok(SpeechIndex::from_iter([(
				"ANA SOUZA".to_string(),
				"ana.json".to_string(),
			)])))
			.unwrap();
		assert_eq!(
			explorer.speech_file_for(0),
			Some(("Ana Souza".to_string(), "/public/discursos/ana.json".to_string()))
		);
		assert_eq!(explorer.speech_file_for(1), None);
	}

	#[test]
	fn failed_speech_index_keeps_feature_degraded() {
		let mut explorer = Explorer::default();
		let err = VizError::FetchFailure {
			url: "/mapeamento_discursos.json".into(),
			reason: "HTTP 404".into(),
		};
		assert!(explorer.set_speech_index(Err(err)).is_err());
		assert_eq!(explorer.speech_file_for(0), None);
	}
}
