//! Row parsing: loose-typed spreadsheet records into typed chart data.
//!
//! Spreadsheet data is assumed inconsistent, so every field coerces with a
//! named default instead of failing. Parsing is pure: the same rows always
//! produce the same `ChartData`.

use std::collections::HashMap;

use serde_json::Value;

use super::types::{ChartData, LineageEdge, OrgNode, PartyDetail, Relation};

pub const DEFAULT_YEAR: i32 = 2000;
pub const DEFAULT_COLOR: &str = "#1976d2";
pub const DEFAULT_LOGO: &str = "/assets/placeholder-logo.svg";
pub const DEFAULT_STATUS: &str = "active";

/// Tokens accepted as "true" in boolean-ish spreadsheet columns,
/// compared case-insensitively. Anything else is false.
const TRUTHY_TOKENS: &[&str] = &["yes", "y", "true", "1"];

/// Trimmed string value of a field, treating blank and missing alike.
fn field_str(row: &Value, key: &str) -> Option<String> {
	let v = row.get(key)?;
	let s = match v {
		Value::String(s) => s.trim().to_string(),
		Value::Number(n) => n.to_string(),
		_ => return None,
	};
	if s.is_empty() { None } else { Some(s) }
}

fn field_or(row: &Value, key: &str, default: &str) -> String {
	field_str(row, key).unwrap_or_else(|| default.to_string())
}

/// Integer year from a number or numeric string; `default` on anything else.
fn field_year(row: &Value, key: &str, default: i32) -> i32 {
	match row.get(key) {
		Some(Value::Number(n)) => n
			.as_i64()
			.and_then(|n| i32::try_from(n).ok())
			.unwrap_or(default),
		Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
		_ => default,
	}
}

fn field_bool(row: &Value, key: &str) -> bool {
	match row.get(key) {
		Some(Value::Bool(b)) => *b,
		Some(Value::String(s)) => {
			let s = s.trim();
			TRUTHY_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(s))
		}
		Some(Value::Number(n)) => n.as_i64() == Some(1),
		_ => false,
	}
}

/// Parse raw rows into nodes, edges and details.
///
/// Rows without an `id` are skipped. An edge is emitted only when the
/// row names a non-blank `ancestorId`; edges may still reference ids
/// that never appear — the graph index drops those later.
pub fn parse_rows(rows: &[Value]) -> ChartData {
	let mut nodes = Vec::new();
	let mut edges = Vec::new();
	let mut details = HashMap::new();

	for row in rows {
		let Some(id) = field_str(row, "id") else {
			continue;
		};

		nodes.push(OrgNode {
			id: id.clone(),
			name: field_or(row, "name", ""),
			short_name: field_or(row, "shortName", ""),
			founding_year: field_year(row, "foundingYear", DEFAULT_YEAR),
			color: field_or(row, "colorHint", DEFAULT_COLOR),
			logo: field_or(row, "logoRef", DEFAULT_LOGO),
			family: field_or(row, "familyId", &id),
			status: field_or(row, "status", DEFAULT_STATUS),
			armed: field_bool(row, "armedFlag"),
			x: 0.0,
			y: 0.0,
		});

		if let Some(ancestor) = field_str(row, "ancestorId") {
			edges.push(LineageEdge {
				source: ancestor,
				target: id.clone(),
				relation: Relation::from_raw(
					&field_or(row, "relationType", "direct"),
				),
			});
		}

		details.insert(
			id,
			PartyDetail {
				full_name: field_or(row, "name", ""),
				founders: field_or(row, "founders", ""),
				info: field_or(row, "description", ""),
				status: field_or(row, "status", DEFAULT_STATUS),
				start_year: field_or(row, "foundingYear", ""),
				end_year: field_or(row, "endYear", ""),
				website: field_or(row, "website", ""),
				armed: field_bool(row, "armedFlag"),
			},
		);
	}

	ChartData { nodes, edges, details }
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn parses_minimal_split_scenario() {
		let rows = vec![
			json!({"id": "X", "ancestorId": ""}),
			json!({"id": "Y", "ancestorId": "X", "relationType": "split"}),
		];
		let data = parse_rows(&rows);
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.edges.len(), 1);
		assert_eq!(data.edges[0].source, "X");
		assert_eq!(data.edges[0].target, "Y");
		assert_eq!(data.edges[0].relation, Relation::Split);
	}

	#[test]
	fn skips_rows_without_id() {
		let rows = vec![json!({"name": "nameless"}), json!({"id": "  "})];
		let data = parse_rows(&rows);
		assert!(data.nodes.is_empty());
		assert!(data.edges.is_empty());
	}

	#[test]
	fn blank_ancestor_emits_no_edge() {
		let rows = vec![json!({"id": "root", "ancestorId": "   "})];
		let data = parse_rows(&rows);
		assert!(data.edges.is_empty());
	}

	#[test]
	fn numeric_defaults_never_fail() {
		let rows = vec![json!({"id": "a", "foundingYear": "not a year"})];
		let data = parse_rows(&rows);
		assert_eq!(data.nodes[0].founding_year, DEFAULT_YEAR);

		let rows = vec![json!({"id": "a", "foundingYear": 1971})];
		assert_eq!(parse_rows(&rows).nodes[0].founding_year, 1971);

		let rows = vec![json!({"id": "a", "foundingYear": " 1965 "})];
		assert_eq!(parse_rows(&rows).nodes[0].founding_year, 1965);

		// Values past i32 must default, not wrap.
		let rows = vec![json!({"id": "a", "foundingYear": 99_999_999_999_i64})];
		assert_eq!(parse_rows(&rows).nodes[0].founding_year, DEFAULT_YEAR);

		let rows = vec![json!({"id": "a", "foundingYear": 1971.5})];
		assert_eq!(parse_rows(&rows).nodes[0].founding_year, DEFAULT_YEAR);
	}

	#[test]
	fn armed_flag_truthy_tokens() {
		for raw in ["yes", "YES", "y", "True", "1"] {
			let rows = vec![json!({"id": "a", "armedFlag": raw})];
			assert!(parse_rows(&rows).nodes[0].armed, "token {raw:?}");
		}
		for raw in ["no", "", "armed", "2"] {
			let rows = vec![json!({"id": "a", "armedFlag": raw})];
			assert!(!parse_rows(&rows).nodes[0].armed, "token {raw:?}");
		}
	}

	#[test]
	fn family_defaults_to_own_id() {
		let rows = vec![json!({"id": "solo"})];
		assert_eq!(parse_rows(&rows).nodes[0].family, "solo");
	}

	#[test]
	fn unknown_relation_passes_through() {
		let rows = vec![json!({"id": "b", "ancestorId": "a", "relationType": "annexed"})];
		let data = parse_rows(&rows);
		assert_eq!(
			data.edges[0].relation,
			Relation::Other("annexed".to_string())
		);
		assert_eq!(data.edges[0].relation.label(), "annexed");
	}

	#[test]
	fn parse_is_idempotent() {
		let rows = vec![
			json!({"id": "X", "name": "First", "foundingYear": 1961}),
			json!({"id": "Y", "ancestorId": "X", "relationType": "split", "armedFlag": "yes"}),
		];
		assert_eq!(parse_rows(&rows), parse_rows(&rows));
	}

	#[test]
	fn details_keyed_per_row() {
		let rows = vec![json!({
			"id": "X",
			"name": "Full Name",
			"founders": "A, B",
			"description": "long text",
			"website": "https://example.org",
			"endYear": "1980",
		})];
		let data = parse_rows(&rows);
		let detail = &data.details["X"];
		assert_eq!(detail.full_name, "Full Name");
		assert_eq!(detail.founders, "A, B");
		assert_eq!(detail.end_year, "1980");
		assert_eq!(detail.status, DEFAULT_STATUS);
	}
}
