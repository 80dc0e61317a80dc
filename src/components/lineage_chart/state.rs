//! Chart session state: one laid-out dataset plus its index and the
//! interaction state. Rebuilt wholesale whenever new data arrives.

use std::collections::HashMap;

use super::index::GraphIndex;
use super::interaction::InteractionState;
use super::layout::{AxisPolicy, LayoutConfig, layout_nodes};
use super::scale::TimeScale;
use super::style::{EdgeVisual, NODE_RADIUS, NodeVisual, edge_visual, node_visual};
use super::types::{ChartData, OrgNode, PartyDetail};

pub struct ChartState {
	data: ChartData,
	index: GraphIndex,
	pub interaction: InteractionState,
	scale: TimeScale,
	node_pos: HashMap<String, usize>,
	width: f64,
}

impl ChartState {
	pub fn new(mut data: ChartData, width: f64, policy: AxisPolicy) -> Self {
		let scale = TimeScale::new();
		let index = GraphIndex::build(&data.nodes, &data.edges);
		layout_nodes(
			&mut data.nodes,
			index.edges(),
			&scale,
			&LayoutConfig { width, policy },
		);
		let node_pos = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.clone(), i))
			.collect();

		Self {
			data,
			index,
			interaction: InteractionState::default(),
			scale,
			node_pos,
			width,
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn scale(&self) -> &TimeScale {
		&self.scale
	}

	pub fn nodes(&self) -> &[OrgNode] {
		&self.data.nodes
	}

	pub fn detail_for(&self, id: &str) -> Option<&PartyDetail> {
		self.data.details.get(id)
	}

	fn node(&self, id: &str) -> Option<&OrgNode> {
		self.node_pos.get(id).map(|&i| &self.data.nodes[i])
	}

	/// Topmost node under a canvas position, if any.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<String> {
		let mut found = None;
		for node in &self.data.nodes {
			let (dx, dy) = (node.x - x, node.y - y);
			if (dx * dx + dy * dy).sqrt() < NODE_RADIUS {
				found = Some(node.id.clone());
			}
		}
		found
	}

	pub fn hover(&mut self, id: &str) {
		self.interaction.hover(&self.index, id);
	}

	pub fn unhover(&mut self) {
		self.interaction.unhover();
	}

	pub fn click(&mut self, id: &str) {
		self.interaction.click(&self.index, id);
	}

	pub fn clear_selection(&mut self) {
		self.interaction.clear_selection();
	}

	pub fn node_visuals(&self) -> Vec<NodeVisual> {
		self.data
			.nodes
			.iter()
			.map(|n| node_visual(n, &self.interaction))
			.collect()
	}

	/// Edge attributes in index order. Dangling edges were already
	/// dropped at index build, so both endpoint lookups succeed.
	pub fn edge_visuals(&self) -> Vec<EdgeVisual> {
		self.index
			.edges()
			.iter()
			.enumerate()
			.filter_map(|(i, e)| {
				let source = self.node(&e.source)?;
				let target = self.node(&e.target)?;
				Some(edge_visual(e, i, source, target, &self.interaction))
			})
			.collect()
	}

	/// Detail card for the focused node, when one exists.
	pub fn focused_detail(&self) -> Option<(&OrgNode, &PartyDetail)> {
		let id = self.interaction.focused_id()?;
		Some((self.node(id)?, self.detail_for(id)?))
	}
}
