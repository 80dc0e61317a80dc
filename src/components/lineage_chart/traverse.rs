//! Ancestor/descendant chain walks.
//!
//! Both directions are an iterative depth-first walk over the index with
//! an owned visited set seeded with the starting node, so cycles from
//! malformed data terminate and each edge is collected at most once.

use std::collections::HashSet;

use super::index::GraphIndex;

enum Direction {
	Ancestors,
	Descendants,
}

/// Edge indices reachable by following incoming edges upward from
/// `node_id`. Unknown ids return an empty set.
pub fn ancestors_of(index: &GraphIndex, node_id: &str) -> Vec<usize> {
	walk(index, node_id, Direction::Ancestors)
}

/// Edge indices reachable by following outgoing edges downward from
/// `node_id`. Unknown ids return an empty set.
pub fn descendants_of(index: &GraphIndex, node_id: &str) -> Vec<usize> {
	walk(index, node_id, Direction::Descendants)
}

fn walk(index: &GraphIndex, node_id: &str, direction: Direction) -> Vec<usize> {
	let mut visited: HashSet<&str> = HashSet::new();
	visited.insert(node_id);
	let mut stack = vec![node_id];
	let mut collected = Vec::new();

	while let Some(current) = stack.pop() {
		let edge_ids = match direction {
			Direction::Ancestors => index.incoming(current),
			Direction::Descendants => index.outgoing(current),
		};
		for &edge_id in edge_ids {
			collected.push(edge_id);
			let edge = &index.edges()[edge_id];
			let next = match direction {
				Direction::Ancestors => edge.source.as_str(),
				Direction::Descendants => edge.target.as_str(),
			};
			if visited.insert(next) {
				stack.push(next);
			}
		}
	}

	collected
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::lineage_chart::test_util::{edge, node};

	fn index_of(ids: &[&str], pairs: &[(&str, &str)]) -> GraphIndex {
		let nodes: Vec<_> = ids.iter().map(|id| node(id, 1970)).collect();
		let edges: Vec<_> = pairs.iter().map(|(s, t)| edge(s, t)).collect();
		GraphIndex::build(&nodes, &edges)
	}

	#[test]
	fn chain_collects_every_edge_upward() {
		// a -> b -> c
		let index = index_of(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
		let up = ancestors_of(&index, "c");
		assert_eq!(up.len(), 2);
		let up_a = ancestors_of(&index, "a");
		assert!(up_a.is_empty());
	}

	#[test]
	fn split_scenario() {
		let index = index_of(&["X", "Y"], &[("X", "Y")]);
		assert_eq!(ancestors_of(&index, "Y").len(), 1);
		assert!(ancestors_of(&index, "X").is_empty());
	}

	#[test]
	fn symmetric_over_a_single_edge() {
		let index = index_of(&["a", "b"], &[("a", "b")]);
		let down = descendants_of(&index, "a");
		let up = ancestors_of(&index, "b");
		assert_eq!(down, vec![0]);
		assert_eq!(up, vec![0]);
	}

	#[test]
	fn cycle_terminates_with_each_edge_once() {
		// a -> b -> a
		let index = index_of(&["a", "b"], &[("a", "b"), ("b", "a")]);

		for start in ["a", "b"] {
			for edges in [ancestors_of(&index, start), descendants_of(&index, start)] {
				let mut seen = edges.clone();
				seen.sort_unstable();
				seen.dedup();
				assert_eq!(seen.len(), edges.len(), "duplicate edge from {start}");
				assert_eq!(edges.len(), 2);
			}
		}
	}

	#[test]
	fn diamond_collects_all_paths() {
		//   a
		//  / \
		// b   c
		//  \ /
		//   d
		let index = index_of(
			&["a", "b", "c", "d"],
			&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
		);
		assert_eq!(ancestors_of(&index, "d").len(), 4);
		assert_eq!(descendants_of(&index, "a").len(), 4);
	}

	#[test]
	fn unknown_start_returns_empty() {
		let index = index_of(&["a"], &[]);
		assert!(ancestors_of(&index, "missing").is_empty());
		assert!(descendants_of(&index, "missing").is_empty());
	}
}
