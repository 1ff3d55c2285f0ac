use force_graph::{EdgeData, ForceGraph, NodeData};

use crate::config::LayoutConfig;
use crate::session::GraphStore;

/// Extra screen pixels around a node that still count as a hit.
pub const HIT_PADDING: f64 = 4.0;
/// Screen radius from which plain nodes get their label drawn.
pub const LABEL_RADIUS: f64 = 7.0;
/// Lower zoom clamp, screen pixels per graph unit.
pub const MIN_ZOOM: f64 = 0.005;
/// Upper zoom clamp.
pub const MAX_ZOOM: f64 = 10.0;
/// Pointer travel below which a press counts as a click.
pub const CLICK_SLOP: f64 = 3.0;

/// Per-node payload carried through the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub store_index: usize,
}

/// Screen = graph * k + (x, y).
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// Press on a node, which becomes a drag once it travels past [`CLICK_SLOP`].
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Press on empty canvas.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Layout and viewport for one session. Rebuilt whenever the session id
/// changes, so no positions leak from one year into the next.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub session_id: u64,
	/// Zoom at which the freshly laid-out graph fit the canvas.
	pub fit_k: f64,
	positions: Vec<(f64, f64)>,
}

impl ForceGraphState {
	pub fn new(
		store: &GraphStore,
		session_id: u64,
		layout: &LayoutConfig,
		width: f64,
		height: f64,
	) -> Self {
		let mut graph = ForceGraph::new(layout.simulation());
		let mut indices = Vec::with_capacity(store.len());

		for (i, node) in store.nodes().iter().enumerate() {
			let (x, y) = node.position();
			indices.push(graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo { store_index: i },
			}));
		}

		for edge in store.edges() {
			if let (Some(&src), Some(&tgt)) = (indices.get(edge.source), indices.get(edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		let mut state = Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			session_id,
			fit_k: 1.0,
			positions: vec![(0.0, 0.0); store.len()],
		};
		for _ in 0..layout.warmup_ticks {
			state.graph.update(0.016);
		}
		state.sync_positions();
		state.fit_to_view();
		state
	}

	/// Layout position of a store node.
	pub fn position(&self, store_index: usize) -> Option<(f64, f64)> {
		self.positions.get(store_index).copied()
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	/// Screen pixels per unit of node size at the current zoom.
	pub fn node_scale(&self) -> f64 {
		(self.transform.k / self.fit_k).sqrt().clamp(0.5, 4.0)
	}

	/// Topmost visible node under a screen point.
	pub fn node_at_position(&self, store: &GraphStore, sx: f64, sy: f64) -> Option<usize> {
		let scale = self.node_scale();
		let mut best: Option<(usize, f64)> = None;
		for (i, &(gx, gy)) in self.positions.iter().enumerate() {
			let Some(attrs) = store.render_attributes(i) else {
				continue;
			};
			let (nx, ny) = self.graph_to_screen(gx, gy);
			let dist = ((nx - sx).powi(2) + (ny - sy).powi(2)).sqrt();
			if dist < attrs.size * scale + HIT_PADDING && best.is_none_or(|(_, d)| dist < d) {
				best = Some((i, dist));
			}
		}
		best.map(|(i, _)| i)
	}

	pub fn begin_drag(&mut self, store_index: usize, sx: f64, sy: f64) {
		let Some((x, y)) = self.position(store_index) else {
			return;
		};
		self.drag = DragState {
			active: true,
			node: Some(store_index),
			moved: false,
			start_x: sx,
			start_y: sy,
			node_start_x: x as f32,
			node_start_y: y as f32,
		};
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.drag.node else {
			return;
		};
		let (dx, dy) = (sx - self.drag.start_x, sy - self.drag.start_y);
		if dx.hypot(dy) > CLICK_SLOP {
			self.drag.moved = true;
		}
		if !self.drag.moved {
			return;
		}
		let (nx, ny) = (
			self.drag.node_start_x + (dx / self.transform.k) as f32,
			self.drag.node_start_y + (dy / self.transform.k) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.data.user_data.store_index == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
		self.sync_positions();
	}

	/// Ends a drag; returns the node when the press never moved (a click).
	pub fn end_drag(&mut self) -> Option<usize> {
		let clicked = match self.drag {
			DragState {
				active: true,
				moved: false,
				node,
				..
			} => node,
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.sync_positions();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	fn sync_positions(&mut self) {
		let positions = &mut self.positions;
		self.graph.visit_nodes(|node| {
			if let Some(slot) = positions.get_mut(node.data.user_data.store_index) {
				*slot = (node.x() as f64, node.y() as f64);
			}
		});
	}

	/// Centers the layout and zooms so it fills the canvas.
	fn fit_to_view(&mut self) {
		let Some((min_x, min_y, max_x, max_y)) = self.positions.iter().fold(
			None,
			|acc: Option<(f64, f64, f64, f64)>, &(x, y)| {
				Some(match acc {
					None => (x, y, x, y),
					Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x), d.max(y)),
				})
			},
		) else {
			return;
		};
		let (span_x, span_y) = ((max_x - min_x).max(1.0), (max_y - min_y).max(1.0));
		let k = ((self.width / span_x).min(self.height / span_y) * 0.9).clamp(MIN_ZOOM, MAX_ZOOM);
		self.transform = ViewTransform {
			x: self.width / 2.0 - (min_x + max_x) / 2.0 * k,
			y: self.height / 2.0 - (min_y + max_y) / 2.0 * k,
			k,
		};
		self.fit_k = k;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ViewerConfig;
	use crate::session::{Dataset, LinkRecord, NodeRecord};

	fn store() -> GraphStore {
		let nodes = (0..4)
			.map(|i| NodeRecord {
				id: format!("n{i}"),
				name: format!("Pessoa {i}"),
				party: "P".into(),
				strength: 0.0,
				community: i,
			})
			.collect();
		let links = vec![LinkRecord {
			source: "n0".into(),
			target: "n1".into(),
			agreement: 0.8,
		}];
		GraphStore::from_dataset(&Dataset { nodes, links }, &ViewerConfig::default()).unwrap()
	}

	fn state(store: &GraphStore) -> ForceGraphState {
		let layout = LayoutConfig {
			warmup_ticks: 5,
			..LayoutConfig::default()
		};
		ForceGraphState::new(store, 1, &layout, 800.0, 600.0)
	}

	#[test]
	fn fitted_layout_lands_on_canvas() {
		let store = store();
		let state = state(&store);
		for i in 0..store.len() {
			let (gx, gy) = state.position(i).unwrap();
			let (sx, sy) = state.graph_to_screen(gx, gy);
			assert!((0.0..=800.0).contains(&sx), "x {sx}");
			assert!((0.0..=600.0).contains(&sy), "y {sy}");
		}
	}

	#[test]
	fn hidden_nodes_cannot_be_hit() {
		let mut store = store();
		let state = state(&store);
		let (gx, gy) = state.position(2).unwrap();
		let (sx, sy) = state.graph_to_screen(gx, gy);
		assert_eq!(state.node_at_position(&store, sx, sy), Some(2));
		store.set_hidden("n2", true).unwrap();
		assert_ne!(state.node_at_position(&store, sx, sy), Some(2));
	}

	#[test]
	fn press_without_motion_is_a_click() {
		let store = store();
		let mut state = state(&store);
		state.begin_drag(1, 10.0, 10.0);
		state.drag_to(11.0, 10.0);
		assert_eq!(state.end_drag(), Some(1));

		state.begin_drag(1, 10.0, 10.0);
		state.drag_to(40.0, 10.0);
		assert_eq!(state.end_drag(), None);
	}

	#[test]
	fn zoom_is_clamped() {
		let store = store();
		let mut state = state(&store);
		for _ in 0..200 {
			state.zoom_at(400.0, 300.0, 1.1);
		}
		assert_eq!(state.transform.k, MAX_ZOOM);
	}
}
