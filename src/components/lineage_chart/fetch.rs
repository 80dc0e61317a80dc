//! Remote row fetch. The spreadsheet endpoint is an opaque provider of
//! JSON row objects; any failure collapses into one user-visible "data
//! unavailable" condition.

use serde_json::Value;
use thiserror::Error;

use super::parse::parse_rows;
use super::types::ChartData;

/// Why a dataset could not be loaded.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The HTTP request or JSON decode failed.
	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
	/// The source answered with an empty row set.
	#[error("source returned no rows")]
	Empty,
}

/// Fetch and parse one full dataset. The caller swaps the result in
/// wholesale; a superseding fetch simply overwrites it.
pub async fn fetch_chart_data(url: &str) -> Result<ChartData, FetchError> {
	let rows: Vec<Value> = reqwest::get(url).await?.json().await?;
	rows_to_data(rows)
}

/// Map a fetched payload into chart data. An empty payload is the
/// "data unavailable" condition, not an empty chart.
fn rows_to_data(rows: Vec<Value>) -> Result<ChartData, FetchError> {
	if rows.is_empty() {
		return Err(FetchError::Empty);
	}
	Ok(parse_rows(&rows))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn empty_payload_maps_to_data_unavailable() {
		assert!(matches!(rows_to_data(Vec::new()), Err(FetchError::Empty)));
	}

	#[test]
	fn rows_map_into_chart_data() {
		let rows = vec![
			json!({"id": "X"}),
			json!({"id": "Y", "ancestorId": "X", "relationType": "split"}),
		];
		let data = rows_to_data(rows).expect("payload should parse");
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.edges.len(), 1);
	}
}
