//! Small constructors shared by the engine tests.

use super::parse::{DEFAULT_COLOR, DEFAULT_LOGO};
use super::types::{LineageEdge, OrgNode, Relation};

pub fn node(id: &str, founding_year: i32) -> OrgNode {
	node_in_family(id, founding_year, id)
}

pub fn node_in_family(id: &str, founding_year: i32, family: &str) -> OrgNode {
	OrgNode {
		id: id.to_string(),
		name: id.to_string(),
		short_name: id.to_string(),
		founding_year,
		color: DEFAULT_COLOR.to_string(),
		logo: DEFAULT_LOGO.to_string(),
		family: family.to_string(),
		status: "active".to_string(),
		armed: false,
		x: 0.0,
		y: 0.0,
	}
}

pub fn edge(source: &str, target: &str) -> LineageEdge {
	LineageEdge {
		source: source.to_string(),
		target: target.to_string(),
		relation: Relation::Split,
	}
}
