use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use crate::components::lineage_chart::{ChartData, LineageChartCanvas, fetch_chart_data};

/// Spreadsheet-backed row source for the chart.
const DATA_SOURCE_URL: &str =
	"https://script.google.com/macros/s/AKfycbwvhTlVgW9A0p1xx40Y237aWyluAA4bp8NvXw5h4uO33VJXn7ZtOrYMR1aI0vrR60XP/exec";

/// Default Home Page: fetches the dataset once and shows the chart,
/// a loading indicator, or a single "data unavailable" message.
#[component]
pub fn Home() -> impl IntoView {
	let loaded = RwSignal::new(None::<Result<ChartData, String>>);

	spawn_local(async move {
		let result = fetch_chart_data(DATA_SOURCE_URL).await;
		if let Err(err) = &result {
			error!("chart data fetch failed: {err}");
		}
		// Last writer wins: any newer fetch replaces this result whole.
		loaded.set(Some(result.map_err(|e| e.to_string())));
	});

	let chart_data = Signal::derive(move || match loaded.get() {
		Some(Ok(data)) => data,
		_ => ChartData::default(),
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="lineage-page">
				<div class="chart-heading">
					<h1>"Organization Lineage Timeline"</h1>
				</div>
				{move || match loaded.get() {
					None => view! {
						<p class="chart-status">"Loading data..."</p>
					}
						.into_any(),
					Some(Err(_)) => view! {
						<p class="chart-status chart-error">"Data unavailable"</p>
					}
						.into_any(),
					Some(Ok(_)) => view! {
						<div class="timeline-container">
							<LineageChartCanvas data=chart_data />
						</div>
					}
						.into_any(),
				}}
			</div>
		</ErrorBoundary>
	}
}
