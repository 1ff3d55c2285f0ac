//! Party coloring overlay. The only writer of a node's base color.

use super::palette::community_color;
use super::store::GraphStore;
use crate::error::Result;

/// Party mode switch; off after every load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartyOverlay {
	enabled: bool,
}

impl PartyOverlay {
	/// Whether nodes are colored by party.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Recolors every node: by party when enabled, by community otherwise.
	/// Search highlight state is untouched.
	pub fn set_party_mode_enabled(&mut self, store: &mut GraphStore, enabled: bool) -> Result<usize> {
		let plan = store
			.nodes()
			.iter()
			.map(|node| {
				let color = if enabled {
					store.party_table().color(node.party())?
				} else {
					community_color(node.community())
				};
				Ok((node.id().to_string(), color))
			})
			.collect::<Result<Vec<_>>>()?;

		let mut changed = 0;
		for (id, color) in plan {
			if store.set_color(&id, color)? {
				changed += 1;
			}
		}
		self.enabled = enabled;
		Ok(changed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ViewerConfig;
	use crate::session::dataset::{Dataset, NodeRecord};

	fn store() -> GraphStore {
		let nodes = [("a", "X", 0), ("b", "Y", 0), ("c", "X", 5)]
			.iter()
			.map(|&(id, party, community)| NodeRecord {
				id: id.into(),
				name: id.to_uppercase(),
				party: party.into(),
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
	fn nodes_sharing_a_party_share_a_color() {
		let mut store = store();
		let mut overlay = PartyOverlay::default();
		overlay.set_party_mode_enabled(&mut store, true).unwrap();
		assert!(overlay.is_enabled());
		let a = store.node("a").unwrap().attrs().color;
		let c = store.node("c").unwrap().attrs().color;
		assert_eq!(a, c);
		assert_eq!(a, store.party_table().color("X").unwrap());
	}

	#[test]
	fn disabling_restores_community_colors() {
		let mut store = store();
		let pristine = store.clone();
		let mut overlay = PartyOverlay::default();
		overlay.set_party_mode_enabled(&mut store, true).unwrap();
		overlay.set_party_mode_enabled(&mut store, false).unwrap();
		assert_eq!(store, pristine);
	}

	#[test]
	fn highlight_survives_a_color_toggle() {
		let mut store = store();
		store.set_highlighted("b", true).unwrap();
		let mut overlay = PartyOverlay::default();
		overlay.set_party_mode_enabled(&mut store, true).unwrap();
		let attrs = store.render_attributes(1).unwrap();
		assert!(attrs.ring);
		assert_eq!(attrs.color, store.party_table().color("Y").unwrap());
	}
}
