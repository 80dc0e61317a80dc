//! Lookup structures over the parsed graph: nodes by id, edges by
//! source and by target. Edges whose endpoints are unknown are dropped
//! here so no dangling reference ever reaches traversal or layout.

use std::collections::{HashMap, HashSet};

use super::types::{LineageEdge, OrgNode};

/// By-id, by-source and by-target lookups over one dataset.
#[derive(Clone, Debug, Default)]
pub struct GraphIndex {
	ids: HashSet<String>,
	edges: Vec<LineageEdge>,
	incoming: HashMap<String, Vec<usize>>,
	outgoing: HashMap<String, Vec<usize>>,
}

impl GraphIndex {
	/// Build the index in O(V + E). Edges referencing ids absent from
	/// `nodes` are excluded entirely.
	pub fn build(nodes: &[OrgNode], edges: &[LineageEdge]) -> Self {
		let ids: HashSet<String> = nodes.iter().map(|n| n.id.clone()).collect();

		let mut kept = Vec::new();
		let mut incoming: HashMap<String, Vec<usize>> = HashMap::new();
		let mut outgoing: HashMap<String, Vec<usize>> = HashMap::new();

		for edge in edges {
			if !ids.contains(&edge.source) || !ids.contains(&edge.target) {
				continue;
			}
			let idx = kept.len();
			incoming.entry(edge.target.clone()).or_default().push(idx);
			outgoing.entry(edge.source.clone()).or_default().push(idx);
			kept.push(edge.clone());
		}

		Self { ids, edges: kept, incoming, outgoing }
	}

	/// Whether `id` names a known node.
	pub fn contains(&self, id: &str) -> bool {
		self.ids.contains(id)
	}

	/// All edges that survived endpoint validation, in input order.
	pub fn edges(&self) -> &[LineageEdge] {
		&self.edges
	}

	/// Indices into `edges()` of edges whose target is `id`.
	pub fn incoming(&self, id: &str) -> &[usize] {
		self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Indices into `edges()` of edges whose source is `id`.
	pub fn outgoing(&self, id: &str) -> &[usize] {
		self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::lineage_chart::test_util::{edge, node};

	#[test]
	fn drops_dangling_edges() {
		let nodes = vec![node("a", 1960), node("b", 1970)];
		let edges = vec![
			edge("a", "b"),
			edge("a", "ghost"),
			edge("ghost", "b"),
		];
		let index = GraphIndex::build(&nodes, &edges);

		assert_eq!(index.edges().len(), 1);
		for e in index.edges() {
			assert!(index.contains(&e.source));
			assert!(index.contains(&e.target));
		}
	}

	#[test]
	fn incoming_and_outgoing_partition_edges() {
		let nodes = vec![node("a", 1960), node("b", 1970), node("c", 1980)];
		let edges = vec![edge("a", "b"), edge("a", "c"), edge("b", "c")];
		let index = GraphIndex::build(&nodes, &edges);

		assert_eq!(index.outgoing("a").len(), 2);
		assert_eq!(index.incoming("c").len(), 2);
		assert_eq!(index.incoming("a").len(), 0);
		assert_eq!(index.outgoing("c").len(), 0);
	}

	#[test]
	fn unknown_id_yields_empty_slices() {
		let index = GraphIndex::build(&[], &[]);
		assert!(!index.contains("missing"));
		assert!(index.incoming("missing").is_empty());
		assert!(index.outgoing("missing").is_empty());
	}
}
