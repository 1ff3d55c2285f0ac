//! Community visibility. The only writer of a node's `hidden` flag.

use std::collections::BTreeSet;

use super::store::GraphStore;
use crate::error::Result;

/// Which communities of the current load are shown.
#[derive(Clone, Debug, PartialEq)]
pub struct CommunityFilter {
	available: Vec<u32>,
	selected: BTreeSet<u32>,
}

impl CommunityFilter {
	/// Enumerates the communities present in `store`, in first-seen order,
	/// all of them selected.
	pub fn new(store: &GraphStore) -> Self {
		let mut available = Vec::new();
		let mut seen = BTreeSet::new();
		store.for_each_node(|node| {
			if seen.insert(node.community()) {
				available.push(node.community());
			}
		});
		Self {
			available,
			selected: seen,
		}
	}

	/// Every community of the load, first-seen order.
	pub fn available(&self) -> &[u32] {
		&self.available
	}

	/// Communities currently shown.
	pub fn selected(&self) -> &BTreeSet<u32> {
		&self.selected
	}

	/// Whether `community` is currently shown.
	pub fn is_selected(&self, community: u32) -> bool {
		self.selected.contains(&community)
	}

	/// Replaces the selection; a node is visible iff its community is in
	/// `ids`. Returns how many nodes changed visibility.
	pub fn set_selected_communities(
		&mut self,
		store: &mut GraphStore,
		ids: BTreeSet<u32>,
	) -> Result<usize> {
		let plan: Vec<(String, bool)> = store
			.nodes()
			.iter()
			.map(|node| (node.id().to_string(), !ids.contains(&node.community())))
			.collect();

		let mut changed = 0;
		for (id, hidden) in &plan {
			if store.set_hidden(id, *hidden)? {
				changed += 1;
			}
		}
		self.selected = ids;
		Ok(changed)
	}

	/// Flips one community in or out and reapplies the full selection.
	pub fn toggle(&mut self, store: &mut GraphStore, community: u32, selected: bool) -> Result<usize> {
		let mut ids = self.selected.clone();
		if selected {
			ids.insert(community);
		} else {
			ids.remove(&community);
		}
		self.set_selected_communities(store, ids)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ViewerConfig;
	use crate::session::dataset::{Dataset, NodeRecord};

	fn store(communities: &[u32]) -> GraphStore {
		let nodes = communities
			.iter()
			.enumerate()
			.map(|(i, &community)| NodeRecord {
				id: format!("n{i}"),
				name: format!("Pessoa {i}"),
				party: "P".into(),
				strength: 0.0,
				community,
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
	fn enumerates_communities_in_first_seen_order() {
		let store = store(&[3, 1, 3, 0, 1]);
		let filter = CommunityFilter::new(&store);
		assert_eq!(filter.available(), &[3, 1, 0]);
		assert!(filter.is_selected(0) && filter.is_selected(1) && filter.is_selected(3));
	}

	#[test]
	fn selection_is_replaced_not_merged() {
		let mut store = store(&[0, 1, 2]);
		let mut filter = CommunityFilter::new(&store);
		filter
			.set_selected_communities(&mut store, BTreeSet::from([0]))
			.unwrap();
		filter
			.set_selected_communities(&mut store, BTreeSet::from([2]))
			.unwrap();
		let hidden: Vec<bool> = store.nodes().iter().map(|n| n.attrs().hidden).collect();
		assert_eq!(hidden, [true, true, false]);
	}

	#[test]
	fn empty_selection_hides_everything() {
		let mut store = store(&[0, 1]);
		let mut filter = CommunityFilter::new(&store);
		assert_eq!(
			filter
				.set_selected_communities(&mut store, BTreeSet::new())
				.unwrap(),
			2
		);
		assert!(store.nodes().iter().all(|n| n.attrs().hidden));
	}

	#[test]
	fn toggle_is_idempotent() {
		let mut store = store(&[0, 1, 1]);
		let mut filter = CommunityFilter::new(&store);
		assert_eq!(filter.toggle(&mut store, 1, false).unwrap(), 2);
		assert_eq!(filter.toggle(&mut store, 1, false).unwrap(), 0);
		assert_eq!(filter.toggle(&mut store, 1, true).unwrap(), 2);
		assert!(store.nodes().iter().all(|n| !n.attrs().hidden));
	}
}
