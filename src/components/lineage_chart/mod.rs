mod component;
pub mod fetch;
mod index;
mod interaction;
mod layout;
mod parse;
mod render;
pub mod scale;
mod state;
mod style;
mod traverse;
mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use component::LineageChartCanvas;
pub use fetch::{FetchError, fetch_chart_data};
pub use layout::AxisPolicy;
pub use parse::parse_rows;
pub use types::{ChartData, LineageEdge, OrgNode, PartyDetail, Relation};
