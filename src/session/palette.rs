//! Community and party palettes.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, VizError};

/// A CSS color taken from one of the fixed palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
	/// CSS text, e.g. `#e6194b`.
	pub fn as_str(&self) -> &'static str {
		self.0
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

const COMMUNITY_COLORS: &[Color] = &[
	Color("#e6194b"), Color("#3cb44b"), Color("#ffe119"), Color("#4363d8"), Color("#f58231"),
	Color("#911eb4"), Color("#46f0f0"), Color("#f032e6"), Color("#bcf60c"), Color("#fabebe"),
	Color("#008080"), Color("#e6beff"), Color("#9a6324"), Color("#fffac8"), Color("#800000"),
];

const PARTY_COLORS: &[Color] = &[
	Color("#e6194b"), Color("#3cb44b"), Color("#ffe119"), Color("#4363d8"), Color("#f58231"),
	Color("#911eb4"), Color("#46f0f0"), Color("#bcf60c"), Color("#fabebe"), Color("#008080"),
	Color("#e6beff"), Color("#9a6324"), Color("#fffac8"), Color("#800000"), Color("#aaffc3"),
	Color("#808000"), Color("#ffd8b1"), Color("#000075"), Color("#808080"),
];

/// Number of distinct community colors before wraparound.
pub const COMMUNITY_PALETTE_LEN: usize = COMMUNITY_COLORS.len();
/// Number of distinct party colors before wraparound.
pub const PARTY_PALETTE_LEN: usize = PARTY_COLORS.len();

/// Color for a community id. Total and stable for the process lifetime.
pub fn community_color(community: u32) -> Color {
	COMMUNITY_COLORS[community as usize % COMMUNITY_COLORS.len()]
}

/// Party → color assignments for one dataset load, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartyColorTable {
	entries: Vec<(String, Color)>,
	index: HashMap<String, usize>,
}

impl PartyColorTable {
	/// Assigns palette entries to parties in the order they first appear,
	/// cycling once the palette runs out.
	pub fn build<'a>(parties: impl IntoIterator<Item = &'a str>) -> Self {
		let mut table = Self::default();
		for party in parties {
			if table.index.contains_key(party) {
				continue;
			}
			let color = PARTY_COLORS[table.entries.len() % PARTY_COLORS.len()];
			table.index.insert(party.to_string(), table.entries.len());
			table.entries.push((party.to_string(), color));
		}
		table
	}

	/// Fails with [`VizError::UnknownParty`] for a party this load never saw.
	pub fn color(&self, party: &str) -> Result<Color> {
		self.index
			.get(party)
			.map(|&i| self.entries[i].1)
			.ok_or_else(|| VizError::UnknownParty(party.to_string()))
	}

	/// Legend rows, first-seen order.
	pub fn entries(&self) -> &[(String, Color)] {
		&self.entries
	}

	/// Number of distinct parties.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True before any load.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
