//! Yearly snapshot as published by the data pipeline.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One politician as it appears in `{year}.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
	/// Stable id, unique within the snapshot.
	pub id: String,
	/// Display name.
	#[serde(rename = "nome")]
	pub name: String,
	/// Party acronym.
	#[serde(rename = "partido")]
	pub party: String,
	/// Weighted degree from the pipeline; not used for display.
	#[serde(default)]
	pub strength: f64,
	/// Detected community id.
	#[serde(rename = "comunidade")]
	pub community: u32,
}

/// Voting agreement between two politicians. Undirected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
	/// Id of one endpoint.
	pub source: String,
	/// Id of the other endpoint.
	pub target: String,
	/// Share of votes cast alike, in `[0, 1]`.
	#[serde(rename = "concordancia")]
	pub agreement: f64,
}

/// Immutable snapshot for one year.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
	/// Politicians, in publication order.
	pub nodes: Vec<NodeRecord>,
	/// Agreement edges; may be absent.
	#[serde(default)]
	pub links: Vec<LinkRecord>,
}

impl Dataset {
	/// Decodes a snapshot body; malformed input is a `ParseFailure`.
	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}
}
