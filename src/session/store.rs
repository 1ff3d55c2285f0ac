//! Authoritative node/edge state read by the canvas every frame.
//!
//! Each filter owns a slice of a node's [`NodeAttributes`]: the community
//! filter owns `hidden`, search owns `highlighted`, `size`, `label_visible`
//! and `priority`, the party overlay owns `color`. Nothing reads the raw
//! attributes for drawing; [`GraphStore::render_attributes`] composes them.

use std::collections::HashMap;

use log::warn;

use super::dataset::Dataset;
use super::palette::{Color, PartyColorTable, community_color};
use crate::config::ViewerConfig;
use crate::error::{Result, VizError};

/// Stroke color shared by every edge.
pub const EDGE_COLOR: &str = "rgba(0, 0, 0, 0.08)";

/// Stroke weight per unit of agreement.
pub const EDGE_WEIGHT_SCALE: f64 = 2.0;

/// Paint order bucket; lowered nodes are drawn first and faded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawPriority {
	/// Search non-candidate.
	Lowered,
	#[default]
	Normal,
	/// Best search match.
	Raised,
}

/// Mutable presentation state of one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeAttributes {
	/// Set by the community filter only.
	pub hidden: bool,
	/// Best match of the last search.
	pub highlighted: bool,
	/// Radius in graph units.
	pub size: f64,
	/// Base fill; community or party color.
	pub color: Color,
	/// Whether the label may be drawn.
	pub label_visible: bool,
	/// Paint order bucket.
	pub priority: DrawPriority,
}

/// A politician in the loaded snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	id: String,
	label: String,
	party: String,
	community: u32,
	position: (f32, f32),
	attrs: NodeAttributes,
}

impl GraphNode {
	/// Dataset id.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Display name.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Party acronym as published.
	pub fn party(&self) -> &str {
		&self.party
	}

	/// Detected community id.
	pub fn community(&self) -> u32 {
		self.community
	}

	/// Seed position for the layout.
	pub fn position(&self) -> (f32, f32) {
		self.position
	}

	/// Current presentation state, before composition.
	pub fn attrs(&self) -> &NodeAttributes {
		&self.attrs
	}
}

/// Undirected edge between two store indices.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	/// Store index of one endpoint.
	pub source: usize,
	/// Store index of the other endpoint.
	pub target: usize,
	/// Share of votes cast alike, `concordancia`.
	pub agreement: f64,
	/// Line width in graph units.
	pub stroke_weight: f64,
	/// CSS stroke color.
	pub color: &'static str,
}

/// Final draw attributes after composing every filter's contribution.
///
/// Precedence: visibility (community) hides everything, then the search
/// highlight (ring, forced label, raised priority, its size), then the base
/// fill color chosen by the party overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderAttributes<'a> {
	/// Fill color.
	pub color: Color,
	/// Radius in graph units.
	pub size: f64,
	/// Label to draw, if any.
	pub label: Option<&'a str>,
	/// Paint order bucket.
	pub priority: DrawPriority,
	/// Outline marking the search highlight.
	pub ring: bool,
}

/// Nodes and edges of one snapshot plus the party table built from it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStore {
	nodes: Vec<GraphNode>,
	edges: Vec<GraphEdge>,
	id_to_index: HashMap<String, usize>,
	parties: PartyColorTable,
	base_size: f64,
}

impl Default for GraphStore {
	fn default() -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			id_to_index: HashMap::new(),
			parties: PartyColorTable::default(),
			base_size: ViewerConfig::default().base_node_size,
		}
	}
}

impl GraphStore {
	/// Builds a fresh store with every node visible and colored by community.
	///
	/// Links that name an unknown node are dropped. Duplicate node ids make
	/// the dataset invalid.
	pub fn from_dataset(dataset: &Dataset, config: &ViewerConfig) -> Result<Self> {
		let mut nodes = Vec::with_capacity(dataset.nodes.len());
		let mut id_to_index = HashMap::with_capacity(dataset.nodes.len());

		for (i, record) in dataset.nodes.iter().enumerate() {
			if id_to_index.insert(record.id.clone(), i).is_some() {
				return Err(VizError::ParseFailure(format!(
					"duplicate node id {:?}",
					record.id
				)));
			}
			let seed = i as u64 * 2;
			nodes.push(GraphNode {
				id: record.id.clone(),
				label: record.name.clone(),
				party: record.party.clone(),
				community: record.community,
				position: (
					scatter(seed) * config.initial_spread,
					scatter(seed + 1) * config.initial_spread,
				),
				attrs: NodeAttributes {
					hidden: false,
					highlighted: false,
					size: config.base_node_size,
					color: community_color(record.community),
					label_visible: true,
					priority: DrawPriority::Normal,
				},
			});
		}

		let mut edges = Vec::with_capacity(dataset.links.len());
		for link in &dataset.links {
			let (Some(&source), Some(&target)) =
				(id_to_index.get(&link.source), id_to_index.get(&link.target))
			else {
				warn!(
					"skipping link {} -> {}: endpoint not in dataset",
					link.source, link.target
				);
				continue;
			};
			edges.push(GraphEdge {
				source,
				target,
				agreement: link.agreement,
				stroke_weight: link.agreement * EDGE_WEIGHT_SCALE,
				color: EDGE_COLOR,
			});
		}

		let parties = PartyColorTable::build(dataset.nodes.iter().map(|n| n.party.as_str()));

		Ok(Self {
			nodes,
			edges,
			id_to_index,
			parties,
			base_size: config.base_node_size,
		})
	}

	/// Replaces the whole graph. On error the current graph is kept.
	pub fn load(&mut self, dataset: &Dataset, config: &ViewerConfig) -> Result<()> {
		*self = Self::from_dataset(dataset, config)?;
		Ok(())
	}

	/// Node count.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True before the first load or for a snapshot without nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Nodes in dataset order; the position is the store index.
	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	/// Edges whose endpoints both exist.
	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	/// Lookup by dataset id.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.index_of(id).map(|i| &self.nodes[i])
	}

	/// Lookup by store index.
	pub fn node_at(&self, index: usize) -> Option<&GraphNode> {
		self.nodes.get(index)
	}

	/// Store index of a dataset id.
	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.id_to_index.get(id).copied()
	}

	/// Party colors of this load.
	pub fn party_table(&self) -> &PartyColorTable {
		&self.parties
	}

	/// Size of a node no search has enlarged.
	pub fn base_size(&self) -> f64 {
		self.base_size
	}

	/// Visits nodes in dataset order.
	pub fn for_each_node(&self, mut f: impl FnMut(&GraphNode)) {
		for node in &self.nodes {
			f(node);
		}
	}

	/// Each setter returns whether the value changed and fails with
	/// [`VizError::NotFound`] for an id outside this store.
	pub fn set_hidden(&mut self, id: &str, hidden: bool) -> Result<bool> {
		let node = self.node_mut(id)?;
		Ok(replace_if_changed(&mut node.attrs.hidden, hidden))
	}

	/// See [`GraphStore::set_hidden`].
	pub fn set_highlighted(&mut self, id: &str, highlighted: bool) -> Result<bool> {
		let node = self.node_mut(id)?;
		Ok(replace_if_changed(&mut node.attrs.highlighted, highlighted))
	}

	/// See [`GraphStore::set_hidden`].
	pub fn set_size(&mut self, id: &str, size: f64) -> Result<bool> {
		let node = self.node_mut(id)?;
		Ok(replace_if_changed(&mut node.attrs.size, size))
	}

	/// See [`GraphStore::set_hidden`].
	pub fn set_color(&mut self, id: &str, color: Color) -> Result<bool> {
		let node = self.node_mut(id)?;
		Ok(replace_if_changed(&mut node.attrs.color, color))
	}

	/// See [`GraphStore::set_hidden`].
	pub fn set_label_visible(&mut self, id: &str, visible: bool) -> Result<bool> {
		let node = self.node_mut(id)?;
		Ok(replace_if_changed(&mut node.attrs.label_visible, visible))
	}

	/// See [`GraphStore::set_hidden`].
	pub fn set_priority(&mut self, id: &str, priority: DrawPriority) -> Result<bool> {
		let node = self.node_mut(id)?;
		Ok(replace_if_changed(&mut node.attrs.priority, priority))
	}

	/// `None` for hidden nodes and out-of-range indices.
	pub fn render_attributes(&self, index: usize) -> Option<RenderAttributes<'_>> {
		let node = self.nodes.get(index)?;
		let attrs = &node.attrs;
		if attrs.hidden {
			return None;
		}
		Some(RenderAttributes {
			color: attrs.color,
			size: attrs.size,
			label: (attrs.label_visible || attrs.highlighted).then_some(node.label.as_str()),
			priority: if attrs.highlighted {
				DrawPriority::Raised
			} else {
				attrs.priority
			},
			ring: attrs.highlighted,
		})
	}

	fn node_mut(&mut self, id: &str) -> Result<&mut GraphNode> {
		let index = self
			.index_of(id)
			.ok_or_else(|| VizError::NotFound(id.to_string()))?;
		Ok(&mut self.nodes[index])
	}
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
	if *slot == value {
		return false;
	}
	*slot = value;
	true
}

/// Deterministic scatter in `[-1, 1)` (splitmix64 finalizer).
fn scatter(seed: u64) -> f32 {
	let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
	z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
	z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
	z ^= z >> 31;
	((z >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0) as f32
}
