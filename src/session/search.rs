//! Name search over the visible nodes.

use std::collections::HashSet;

use super::store::{DrawPriority, GraphStore};
use crate::error::Result;

/// Presentation that search assigns to a node.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Emphasis {
	highlighted: bool,
	size: f64,
	label_visible: bool,
	priority: DrawPriority,
}

/// Highlights the best label match; never touches `hidden`.
///
/// The highlight is computed only when [`SearchFilter::search`] runs. If
/// the community filter later hides the match, it stays highlighted (and
/// undrawn) until the next search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchFilter {
	query: String,
	best_match: Option<String>,
	highlight_size: f64,
}

impl SearchFilter {
	/// Empty search; the best match is drawn at `highlight_size`.
	pub fn new(highlight_size: f64) -> Self {
		Self {
			query: String::new(),
			best_match: None,
			highlight_size,
		}
	}

	/// Last query, lower-cased.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Id of the highlighted node from the last search.
	pub fn best_match(&self) -> Option<&str> {
		self.best_match.as_deref()
	}

	/// Runs a search with an already lower-cased `query`. Empty clears.
	pub fn search(&mut self, store: &mut GraphStore, query: &str) -> Result<Option<&str>> {
		let base = store.base_size();
		let neutral = Emphasis {
			highlighted: false,
			size: base,
			label_visible: true,
			priority: DrawPriority::Normal,
		};

		let (best, candidates) = if query.is_empty() {
			(None, HashSet::new())
		} else {
			rank_candidates(store, query)
		};

		let plan: Vec<(String, Emphasis)> = store
			.nodes()
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let emphasis = if query.is_empty() || candidates.contains(&i) {
					if best == Some(i) {
						Emphasis {
							highlighted: true,
							size: self.highlight_size,
							label_visible: true,
							priority: DrawPriority::Raised,
						}
					} else {
						neutral
					}
				} else {
					Emphasis {
						label_visible: false,
						priority: DrawPriority::Lowered,
						..neutral
					}
				};
				(node.id().to_string(), emphasis)
			})
			.collect();

		for (id, emphasis) in &plan {
			store.set_highlighted(id, emphasis.highlighted)?;
			store.set_size(id, emphasis.size)?;
			store.set_label_visible(id, emphasis.label_visible)?;
			store.set_priority(id, emphasis.priority)?;
		}

		self.query = query.to_string();
		self.best_match = best
			.and_then(|i| store.node_at(i))
			.map(|node| node.id().to_string());
		Ok(self.best_match.as_deref())
	}
}

/// Visible nodes whose label contains `query`, best first: prefix matches
/// before inner matches, then by lower-cased label so case never decides
/// the order, then by store index.
fn rank_candidates(store: &GraphStore, query: &str) -> (Option<usize>, HashSet<usize>) {
	let mut ranked: Vec<(bool, String, usize)> = store
		.nodes()
		.iter()
		.enumerate()
		.filter(|(_, node)| !node.attrs().hidden)
		.filter_map(|(i, node)| {
			let label = node.label().to_lowercase();
			let at = label.find(query)?;
			Some((at != 0, label, i))
		})
		.collect();
	ranked.sort();
	let best = ranked.first().map(|(_, _, i)| *i);
	(best, ranked.into_iter().map(|(_, _, i)| i).collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ViewerConfig;
	use crate::session::dataset::{Dataset, NodeRecord};

	fn store(names: &[&str]) -> GraphStore {
		let nodes = names
			.iter()
			.enumerate()
			.map(|(i, name)| NodeRecord {
				id: format!("n{i}"),
				name: name.to_string(),
				party: "P".into(),
				strength: 0.0,
				community: 0,
			})
			.collect();
		GraphStore::from_dataset(
			&Dataset {
				nodes,
				links: Vec::new(),
			},
			&ViewerConfig::default(),
		)
		.unwrap()
	}

	#[test]
	fn prefix_match_beats_inner_match() {
		let mut store = store(&["Joana Silva", "Ana Paula", "Mariana"]);
		let mut search = SearchFilter::new(10.0);
		assert_eq!(search.search(&mut store, "ana").unwrap(), Some("n1"));
		let best = store.node("n1").unwrap().attrs();
		assert!(best.highlighted);
		assert_eq!(best.size, 10.0);
		assert_eq!(best.priority, DrawPriority::Raised);
	}

	#[test]
	fn ties_break_on_label_order() {
		let mut store = store(&["Zilda Santos", "Bruna Santos", "Carlos Santos"]);
		let mut search = SearchFilter::new(10.0);
		assert_eq!(search.search(&mut store, "santos").unwrap(), Some("n1"));
		let others: Vec<bool> = ["n0", "n2"]
			.iter()
			.map(|id| store.node(id).unwrap().attrs().highlighted)
			.collect();
		assert_eq!(others, [false, false]);
	}

	#[test]
	fn label_order_ignores_case_then_falls_back_to_insertion() {
		let mut store = store(&["ana Silva", "Beto Silva"]);
		let mut search = SearchFilter::new(10.0);
		assert_eq!(search.search(&mut store, "silva").unwrap(), Some("n0"));

		let mut store = self::store(&["Ana", "Ana"]);
		assert_eq!(search.search(&mut store, "an").unwrap(), Some("n0"));
	}

	#[test]
	fn non_candidates_are_faded_but_other_candidates_keep_labels() {
		let mut store = store(&["Ana", "Anabela", "Beto"]);
		let mut search = SearchFilter::new(10.0);
		search.search(&mut store, "ana").unwrap();

		let runner_up = store.node("n1").unwrap().attrs();
		assert!(!runner_up.highlighted);
		assert!(runner_up.label_visible);
		assert_eq!(runner_up.priority, DrawPriority::Normal);

		let miss = store.node("n2").unwrap().attrs();
		assert!(!miss.label_visible);
		assert_eq!(miss.priority, DrawPriority::Lowered);
		assert_eq!(miss.size, 4.0);
	}

	#[test]
	fn hidden_nodes_are_never_matched_nor_unhidden() {
		let mut store = store(&["Ana", "Anabela"]);
		store.set_hidden("n0", true).unwrap();
		let mut search = SearchFilter::new(10.0);
		assert_eq!(search.search(&mut store, "ana").unwrap(), Some("n1"));
		assert!(store.node("n0").unwrap().attrs().hidden);
		assert!(!store.node("n0").unwrap().attrs().highlighted);
	}

	#[test]
	fn no_candidate_means_no_highlight() {
		let mut store = store(&["Ana", "Beto"]);
		let mut search = SearchFilter::new(10.0);
		assert_eq!(search.search(&mut store, "xyz").unwrap(), None);
		assert!(store.nodes().iter().all(|n| !n.attrs().highlighted));
		assert!(store.nodes().iter().all(|n| !n.attrs().label_visible));
	}

	#[test]
	fn empty_query_restores_everything() {
		let mut store = store(&["Ana", "Beto"]);
		let pristine = store.clone();
		let mut search = SearchFilter::new(10.0);
		search.search(&mut store, "be").unwrap();
		assert_ne!(store, pristine);
		search.search(&mut store, "").unwrap();
		assert_eq!(store, pristine);
		assert_eq!(search.best_match(), None);
		assert_eq!(search.query(), "");
	}
}
