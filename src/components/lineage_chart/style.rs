//! Visual attribute derivation. Drawing code consumes these structs and
//! never recomputes highlight weights on its own.

use super::interaction::{Emphasis, InteractionState};
use super::types::{LineageEdge, OrgNode, Relation};

pub const NODE_RADIUS: f64 = 35.0;

const REST_EDGE_OPACITY: f64 = 0.6;
const ACTIVE_EDGE_OPACITY: f64 = 0.9;
const DIM_EDGE_OPACITY: f64 = 0.15;
const DIM_NODE_OPACITY: f64 = 0.4;
const REST_EDGE_WIDTH: f64 = 1.5;
const ACTIVE_EDGE_WIDTH: f64 = 3.0;
const NEUTRAL_EDGE_COLOR: &str = "#ddd";

#[derive(Clone, Debug, PartialEq)]
pub struct NodeVisual {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub fill: String,
	pub stroke: String,
	pub stroke_width: f64,
	pub opacity: f64,
	pub label: String,
	pub year_label: String,
	pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeVisual {
	pub source_x: f64,
	pub source_y: f64,
	pub target_x: f64,
	pub target_y: f64,
	pub color: String,
	pub width: f64,
	pub dash: Option<(f64, f64)>,
	pub opacity: f64,
	pub label: String,
	pub highlighted: bool,
}

pub fn relation_color(relation: &Relation) -> &'static str {
	match relation {
		Relation::Evolution => "#2196F3",
		Relation::Split => "#FF5722",
		Relation::Renamed => "#4CAF50",
		Relation::Merged => "#9C27B0",
		Relation::Influence => "#FFC107",
		Relation::Inspiration => "#E91E63",
		Relation::Ideological => "#795548",
		Relation::Direct => "#607D8B",
		Relation::Other(_) => "#999",
	}
}

/// Stroke color encodes lifecycle: armed overrides everything, then
/// active status, then a neutral gray.
fn status_stroke(node: &OrgNode) -> &'static str {
	if node.armed {
		"#ff0000"
	} else if node.status.eq_ignore_ascii_case("active") {
		"#4CAF50"
	} else {
		"#999999"
	}
}

pub fn node_visual(node: &OrgNode, state: &InteractionState) -> NodeVisual {
	let emphasis = state.node_emphasis(&node.id);
	let highlighted = state.focused_id() == Some(node.id.as_str());
	NodeVisual {
		x: node.x,
		y: node.y,
		radius: NODE_RADIUS,
		fill: match emphasis {
			Emphasis::Dimmed => "#aaa".to_string(),
			_ => node.color.clone(),
		},
		stroke: status_stroke(node).to_string(),
		stroke_width: if highlighted { 2.0 } else { 1.5 },
		opacity: match emphasis {
			Emphasis::Dimmed => DIM_NODE_OPACITY,
			_ => 1.0,
		},
		label: node.short_name.clone(),
		year_label: node.founding_year.to_string(),
		highlighted: emphasis == Emphasis::Highlighted,
	}
}

/// Attributes for one edge, given the already laid out endpoints.
pub fn edge_visual(
	edge: &LineageEdge,
	edge_id: usize,
	source: &OrgNode,
	target: &OrgNode,
	state: &InteractionState,
) -> EdgeVisual {
	let emphasis = state.edge_emphasis(edge_id);
	let highlighted = emphasis == Emphasis::Highlighted;
	EdgeVisual {
		source_x: source.x,
		source_y: source.y,
		target_x: target.x,
		target_y: target.y,
		color: if highlighted {
			relation_color(&edge.relation).to_string()
		} else {
			NEUTRAL_EDGE_COLOR.to_string()
		},
		width: if highlighted { ACTIVE_EDGE_WIDTH } else { REST_EDGE_WIDTH },
		dash: match edge.relation {
			Relation::Ideological => Some((5.0, 5.0)),
			_ => None,
		},
		opacity: match emphasis {
			Emphasis::Rest => REST_EDGE_OPACITY,
			Emphasis::Highlighted => ACTIVE_EDGE_OPACITY,
			Emphasis::Dimmed => DIM_EDGE_OPACITY,
		},
		label: edge.relation.label().to_string(),
		highlighted,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::lineage_chart::index::GraphIndex;
	use crate::components::lineage_chart::test_util::{edge, node};

	fn two_node_setup() -> (Vec<OrgNode>, GraphIndex) {
		let nodes = vec![node("a", 1960), node("b", 1970), node("lone", 1990)];
		let edges = vec![edge("a", "b")];
		let index = GraphIndex::build(&nodes, &edges);
		(nodes, index)
	}

	#[test]
	fn rest_weights() {
		let (nodes, index) = two_node_setup();
		let st = InteractionState::default();
		let nv = node_visual(&nodes[0], &st);
		assert_eq!(nv.opacity, 1.0);
		assert_eq!(nv.stroke_width, 1.5);

		let ev = edge_visual(&index.edges()[0], 0, &nodes[0], &nodes[1], &st);
		assert_eq!(ev.opacity, 0.6);
		assert_eq!(ev.width, 1.5);
		assert_eq!(ev.color, "#ddd");
	}

	#[test]
	fn highlighted_edge_takes_relation_color_and_weight() {
		let (nodes, index) = two_node_setup();
		let mut st = InteractionState::default();
		st.click(&index, "b");

		let ev = edge_visual(&index.edges()[0], 0, &nodes[0], &nodes[1], &st);
		assert!(ev.highlighted);
		assert_eq!(ev.opacity, 0.9);
		assert_eq!(ev.width, 3.0);
		assert_eq!(ev.color, relation_color(&index.edges()[0].relation));
	}

	#[test]
	fn unrelated_items_dim() {
		let (nodes, index) = two_node_setup();
		let mut st = InteractionState::default();
		st.hover(&index, "lone");

		let nv = node_visual(&nodes[0], &st);
		assert_eq!(nv.opacity, 0.4);
		assert_eq!(nv.fill, "#aaa");

		let ev = edge_visual(&index.edges()[0], 0, &nodes[0], &nodes[1], &st);
		assert_eq!(ev.opacity, 0.15);
	}

	#[test]
	fn relation_color_and_label_tables_cover_every_variant() {
		let table = [
			(Relation::Evolution, "#2196F3", "Evolution"),
			(Relation::Split, "#FF5722", "Split"),
			(Relation::Renamed, "#4CAF50", "Renamed"),
			(Relation::Merged, "#9C27B0", "Merged"),
			(Relation::Influence, "#FFC107", "Influence"),
			(Relation::Inspiration, "#E91E63", "Inspiration"),
			(Relation::Ideological, "#795548", "Ideological"),
			(Relation::Direct, "#607D8B", "Direct"),
			(Relation::Other("annexed".to_string()), "#999", "annexed"),
		];
		for (relation, color, label) in &table {
			assert_eq!(relation_color(relation), *color, "{label}");
			assert_eq!(relation.label(), *label);
		}
	}

	#[test]
	fn ideological_edges_are_dashed() {
		let e = LineageEdge {
			source: "a".to_string(),
			target: "b".to_string(),
			relation: Relation::Ideological,
		};
		let nodes = [node("a", 1960), node("b", 1970)];
		let st = InteractionState::default();
		let ev = edge_visual(&e, 0, &nodes[0], &nodes[1], &st);
		assert_eq!(ev.dash, Some((5.0, 5.0)));
	}

	#[test]
	fn status_drives_the_node_stroke() {
		let st = InteractionState::default();

		let mut armed = node("a", 1970);
		armed.armed = true;
		armed.status = "dissolved".to_string();
		assert_eq!(node_visual(&armed, &st).stroke, "#ff0000");

		let active = node("b", 1970);
		assert_eq!(node_visual(&active, &st).stroke, "#4CAF50");

		let mut gone = node("c", 1970);
		gone.status = "dissolved".to_string();
		assert_eq!(node_visual(&gone, &st).stroke, "#999999");
	}
}
