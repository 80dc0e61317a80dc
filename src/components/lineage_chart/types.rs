use std::collections::HashMap;

/// One organization on the timeline. Parsed once from a source row;
/// immutable afterwards except for `x`/`y`, which the layout pass assigns.
#[derive(Clone, Debug, PartialEq)]
pub struct OrgNode {
	pub id: String,
	pub name: String,
	pub short_name: String,
	pub founding_year: i32,
	pub color: String,
	pub logo: String,
	pub family: String,
	pub status: String,
	pub armed: bool,
	pub x: f64,
	pub y: f64,
}

/// Directed lineage relationship between two organizations.
#[derive(Clone, Debug, PartialEq)]
pub struct LineageEdge {
	pub source: String,
	pub target: String,
	pub relation: Relation,
}

/// Relation tag carried by an edge. Unrecognized source values pass
/// through as `Other`, never as an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
	Evolution,
	Split,
	Renamed,
	Merged,
	Influence,
	Inspiration,
	Ideological,
	Direct,
	Other(String),
}

impl Relation {
	/// Map a raw source token onto a relation tag.
	pub fn from_raw(raw: &str) -> Self {
		match raw {
			"evolution" => Relation::Evolution,
			"split" => Relation::Split,
			"renamed" => Relation::Renamed,
			"merged" => Relation::Merged,
			"influence" => Relation::Influence,
			"inspiration" => Relation::Inspiration,
			"ideological" => Relation::Ideological,
			"direct" => Relation::Direct,
			other => Relation::Other(other.to_string()),
		}
	}

	/// Display label for the relation; opaque tags show their raw token.
	pub fn label(&self) -> &str {
		match self {
			Relation::Evolution => "Evolution",
			Relation::Split => "Split",
			Relation::Renamed => "Renamed",
			Relation::Merged => "Merged",
			Relation::Influence => "Influence",
			Relation::Inspiration => "Inspiration",
			Relation::Ideological => "Ideological",
			Relation::Direct => "Direct",
			Relation::Other(raw) => raw,
		}
	}
}

/// Long-form descriptive record keyed by node id. May be absent for
/// any given node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartyDetail {
	pub full_name: String,
	pub founders: String,
	pub info: String,
	pub status: String,
	pub start_year: String,
	pub end_year: String,
	pub website: String,
	pub armed: bool,
}

/// One loaded dataset. Replaced wholesale on refetch, never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
	pub nodes: Vec<OrgNode>,
	pub edges: Vec<LineageEdge>,
	pub details: HashMap<String, PartyDetail>,
}
