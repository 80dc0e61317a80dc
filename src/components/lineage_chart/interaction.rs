//! Hover/selection state and the single highlight classification used
//! by all drawing code.
//!
//! Selection is sticky: while a node is selected, hover events change
//! nothing. Clicking the selected node again, or clicking empty canvas,
//! returns to idle.

use std::collections::HashSet;

use super::index::GraphIndex;
use super::traverse::{ancestors_of, descendants_of};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	Idle,
	Hovering(String),
	Selected(String),
}

/// Visual weight bucket for a node or edge, derived purely from the
/// current focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
	/// No hover or selection anywhere; everything rests at full weight.
	Rest,
	/// Part of the focused node's ancestor/descendant chain.
	Highlighted,
	/// Unrelated to the focused node.
	Dimmed,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionState {
	focus: Focus,
	active_edges: HashSet<usize>,
	active_nodes: HashSet<String>,
}

impl InteractionState {
	pub fn focus(&self) -> &Focus {
		&self.focus
	}

	pub fn is_selected(&self) -> bool {
		matches!(self.focus, Focus::Selected(_))
	}

	/// Edge indices (into the index's edge list) on the focused node's
	/// ancestor/descendant chains. Empty while idle.
	pub fn active_edges(&self) -> &HashSet<usize> {
		&self.active_edges
	}

	pub fn hover(&mut self, index: &GraphIndex, id: &str) {
		if self.is_selected() {
			return;
		}
		if self.focus == Focus::Hovering(id.to_string()) {
			return;
		}
		self.focus = Focus::Hovering(id.to_string());
		self.activate(index, id);
	}

	pub fn unhover(&mut self) {
		if matches!(self.focus, Focus::Hovering(_)) {
			self.reset();
		}
	}

	pub fn click(&mut self, index: &GraphIndex, id: &str) {
		if self.focus == Focus::Selected(id.to_string()) {
			self.reset();
			return;
		}
		self.focus = Focus::Selected(id.to_string());
		self.activate(index, id);
	}

	/// Force idle from any state; used by click-outside gestures.
	pub fn clear_selection(&mut self) {
		self.reset();
	}

	fn reset(&mut self) {
		self.focus = Focus::Idle;
		self.active_edges.clear();
		self.active_nodes.clear();
	}

	fn activate(&mut self, index: &GraphIndex, id: &str) {
		self.active_edges.clear();
		self.active_nodes.clear();
		self.active_nodes.insert(id.to_string());

		for edge_id in ancestors_of(index, id)
			.into_iter()
			.chain(descendants_of(index, id))
		{
			self.active_edges.insert(edge_id);
			let edge = &index.edges()[edge_id];
			self.active_nodes.insert(edge.source.clone());
			self.active_nodes.insert(edge.target.clone());
		}
	}

	/// True at rest, or when `id` is the focused node or an endpoint of
	/// any active edge.
	pub fn is_node_active(&self, id: &str) -> bool {
		self.focus == Focus::Idle || self.active_nodes.contains(id)
	}

	pub fn is_edge_active(&self, edge_id: usize) -> bool {
		self.focus == Focus::Idle || self.active_edges.contains(&edge_id)
	}

	pub fn node_emphasis(&self, id: &str) -> Emphasis {
		match self.focus {
			Focus::Idle => Emphasis::Rest,
			_ if self.active_nodes.contains(id) => Emphasis::Highlighted,
			_ => Emphasis::Dimmed,
		}
	}

	pub fn edge_emphasis(&self, edge_id: usize) -> Emphasis {
		match self.focus {
			Focus::Idle => Emphasis::Rest,
			_ if self.active_edges.contains(&edge_id) => Emphasis::Highlighted,
			_ => Emphasis::Dimmed,
		}
	}

	/// The node the user is focused on, if any.
	pub fn focused_id(&self) -> Option<&str> {
		match &self.focus {
			Focus::Idle => None,
			Focus::Hovering(id) | Focus::Selected(id) => Some(id),
		}
	}
}
