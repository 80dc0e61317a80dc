//! Deterministic node placement on the timeline.
//!
//! Vertical position always comes from the founding decade band. The
//! horizontal axis is a configurable policy: either all nodes of a
//! decade centered around the canvas midline, or one column per family
//! with a single pairwise pull pass along edges. Both finish with the
//! same per-band collision pass so co-located nodes never overlap.

use std::collections::{BTreeMap, HashMap};

use super::scale::TimeScale;
use super::types::{LineageEdge, OrgNode};

/// Horizontal distance between nodes laid out in a centered decade row.
pub const DECADE_SPACING: f64 = 90.0;
/// Smallest horizontal gap two nodes in the same decade band may have
/// after collision resolution.
pub const MIN_SPACING: f64 = 80.0;
/// Fraction of the horizontal gap each edge endpoint is pulled toward
/// the other in the family-column policy.
pub const PULL_FACTOR: f64 = 0.2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisPolicy {
	/// Nodes of a decade sorted by year and evenly spaced around the
	/// horizontal midpoint of the canvas.
	#[default]
	DecadeCentered,
	/// One fixed column per family, then one pull pass along edges to
	/// shorten links between related columns.
	FamilyColumns,
}

#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
	pub width: f64,
	pub policy: AxisPolicy,
}

/// Assign `x`/`y` to every node. Pure in everything but the coordinate
/// fields: the same nodes, edges, width and policy always produce the
/// same placement.
pub fn layout_nodes(
	nodes: &mut [OrgNode],
	edges: &[LineageEdge],
	scale: &TimeScale,
	config: &LayoutConfig,
) {
	for node in nodes.iter_mut() {
		node.y = scale.band_center(TimeScale::decade_of(node.founding_year));
	}

	match config.policy {
		AxisPolicy::DecadeCentered => place_decade_centered(nodes, config.width),
		AxisPolicy::FamilyColumns => place_family_columns(nodes, edges, config.width),
	}

	resolve_collisions(nodes);
}

/// Node indices grouped by decade band, band order fixed by year.
fn decade_groups(nodes: &[OrgNode]) -> BTreeMap<i32, Vec<usize>> {
	let mut groups: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
	for (i, node) in nodes.iter().enumerate() {
		groups
			.entry(TimeScale::decade_of(node.founding_year))
			.or_default()
			.push(i);
	}
	groups
}

fn place_decade_centered(nodes: &mut [OrgNode], width: f64) {
	for members in decade_groups(nodes).into_values() {
		let mut members = members;
		// Year first, id as tiebreak so equal years stay reproducible.
		members.sort_by(|&a, &b| {
			(nodes[a].founding_year, nodes[a].id.as_str())
				.cmp(&(nodes[b].founding_year, nodes[b].id.as_str()))
		});

		let total = (members.len() - 1) as f64 * DECADE_SPACING;
		let start = (width - total) / 2.0;
		for (slot, &i) in members.iter().enumerate() {
			nodes[i].x = start + slot as f64 * DECADE_SPACING;
		}
	}
}

fn place_family_columns(nodes: &mut [OrgNode], edges: &[LineageEdge], width: f64) {
	// Column order is first appearance in the input, which is fixed for
	// a given dataset.
	let mut column_of: HashMap<&str, usize> = HashMap::new();
	for node in nodes.iter() {
		let next = column_of.len();
		column_of.entry(node.family.as_str()).or_insert(next);
	}
	let columns = column_of.len().max(1) as f64;

	let xs: Vec<f64> = nodes
		.iter()
		.map(|n| (column_of[n.family.as_str()] as f64 + 0.5) * width / columns)
		.collect();
	for (node, x) in nodes.iter_mut().zip(xs) {
		node.x = x;
	}

	// One pass, not iterated to convergence: each linked pair closes
	// PULL_FACTOR of its gap from both ends.
	let position: HashMap<String, usize> = nodes
		.iter()
		.enumerate()
		.map(|(i, n)| (n.id.clone(), i))
		.collect();
	for edge in edges {
		let (Some(&s), Some(&t)) = (position.get(&edge.source), position.get(&edge.target))
		else {
			continue;
		};
		if s == t {
			continue;
		}
		let gap = nodes[t].x - nodes[s].x;
		nodes[s].x += PULL_FACTOR * gap;
		nodes[t].x -= PULL_FACTOR * gap;
	}
}

/// Spread overlapping nodes within each decade band.
///
/// Sweeps each band left to right, merging nodes into a cluster while
/// their spread extents would still touch, then redistributes every
/// cluster evenly around the mean x of its members at `MIN_SPACING`.
fn resolve_collisions(nodes: &mut [OrgNode]) {
	struct Cluster {
		sum_x: f64,
		members: Vec<usize>,
	}

	impl Cluster {
		fn center(&self) -> f64 {
			self.sum_x / self.members.len() as f64
		}
		fn half_width(&self) -> f64 {
			(self.members.len() - 1) as f64 * MIN_SPACING / 2.0
		}
		fn left(&self) -> f64 {
			self.center() - self.half_width()
		}
		fn right(&self) -> f64 {
			self.center() + self.half_width()
		}
	}

	for members in decade_groups(nodes).into_values() {
		let mut members = members;
		members.sort_by(|&a, &b| {
			nodes[a]
				.x
				.total_cmp(&nodes[b].x)
				.then_with(|| nodes[a].id.cmp(&nodes[b].id))
		});

		let mut clusters: Vec<Cluster> = Vec::new();
		for i in members {
			clusters.push(Cluster { sum_x: nodes[i].x, members: vec![i] });
			// Merging may cascade back to the left edge of the band.
			while clusters.len() > 1 {
				let last = clusters.len() - 1;
				if clusters[last - 1].right() + MIN_SPACING <= clusters[last].left() {
					break;
				}
				let Some(merged) = clusters.pop() else { break };
				clusters[last - 1].sum_x += merged.sum_x;
				clusters[last - 1].members.extend(merged.members);
			}
		}

		for cluster in &clusters {
			let start = cluster.left();
			for (slot, &i) in cluster.members.iter().enumerate() {
				nodes[i].x = start + slot as f64 * MIN_SPACING;
			}
		}
	}
}
