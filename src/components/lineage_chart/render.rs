use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::TOP_MARGIN;
use super::state::ChartState;
use super::style::{EdgeVisual, NodeVisual};
use super::types::PartyDetail;

const POPUP_WIDTH: f64 = 250.0;
const POPUP_HEIGHT: f64 = 170.0;

/// Draw the whole chart. Layering: timeline chrome, resting edges,
/// highlighted edges, resting nodes, highlighted nodes, edge labels,
/// detail popup — emphasis is never occluded by resting content.
pub fn render(state: &ChartState, ctx: &CanvasRenderingContext2d) {
	let (width, height) = (state.width(), state.scale().canvas_height());
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, width, height);

	draw_decades(state, ctx);

	let edges = state.edge_visuals();
	let nodes = state.node_visuals();

	for edge in edges.iter().filter(|e| !e.highlighted) {
		draw_edge(edge, ctx);
	}
	for edge in edges.iter().filter(|e| e.highlighted) {
		draw_edge(edge, ctx);
	}
	for node in nodes.iter().filter(|n| !n.highlighted) {
		draw_node(node, ctx);
	}
	for node in nodes.iter().filter(|n| n.highlighted) {
		draw_node(node, ctx);
	}
	for edge in edges.iter().filter(|e| e.highlighted) {
		draw_edge_label(edge, ctx);
	}

	if let Some((node, detail)) = state.focused_detail() {
		draw_popup(node.x, node.y, detail, width, ctx);
	}
}

fn draw_decades(state: &ChartState, ctx: &CanvasRenderingContext2d) {
	let lines = state.scale().decade_lines();
	let width = state.width();

	for (i, window) in lines.windows(2).enumerate() {
		let band = if i % 2 == 0 { "#f9f9f9" } else { "#ffffff" };
		ctx.set_fill_style_str(band);
		ctx.fill_rect(0.0, window[0].1, width, window[1].1 - window[0].1);
	}

	for &(year, y) in &lines {
		ctx.set_stroke_style_str("#000000");
		ctx.set_line_width(0.5);
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(width, y);
		ctx.stroke();

		ctx.set_fill_style_str("#666666");
		ctx.set_font("bold 12px sans-serif");
		ctx.set_text_align("left");
		let _ = ctx.fill_text(&year.to_string(), 8.0, y - 4.0);
	}
}

fn draw_edge(edge: &EdgeVisual, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(edge.opacity);
	ctx.set_stroke_style_str(&edge.color);
	ctx.set_line_width(edge.width);
	match edge.dash {
		Some((dash, gap)) => {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
		}
		None => {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}

	// Vertical-tangent cubic: control points at the vertical midpoint.
	let mid_y = (edge.source_y + edge.target_y) / 2.0;
	ctx.begin_path();
	ctx.move_to(edge.source_x, edge.source_y);
	ctx.bezier_curve_to(
		edge.source_x,
		mid_y,
		edge.target_x,
		mid_y,
		edge.target_x,
		edge.target_y,
	);
	ctx.stroke();

	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_global_alpha(1.0);
}

fn draw_edge_label(edge: &EdgeVisual, ctx: &CanvasRenderingContext2d) {
	let mid_x = (edge.source_x + edge.target_x) / 2.0;
	let mid_y = (edge.source_y + edge.target_y) / 2.0 - 6.0;

	ctx.set_font("bold 10px sans-serif");
	ctx.set_text_align("center");
	ctx.set_stroke_style_str("#ffffff");
	ctx.set_line_width(4.0);
	let _ = ctx.stroke_text(&edge.label, mid_x, mid_y);
	ctx.set_fill_style_str(&edge.color);
	let _ = ctx.fill_text(&edge.label, mid_x, mid_y);
}

fn draw_node(node: &NodeVisual, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(node.opacity);

	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str("#ffffff");
	ctx.fill();
	ctx.set_stroke_style_str(&node.stroke);
	ctx.set_line_width(node.stroke_width);
	ctx.stroke();

	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, node.radius * 0.45, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&node.fill);
	ctx.fill();

	ctx.set_text_align("center");
	ctx.set_font("12px sans-serif");
	ctx.set_fill_style_str(if node.highlighted { "#000000" } else { "#999999" });
	let _ = ctx.fill_text(&node.label, node.x, node.y + node.radius + 15.0);
	ctx.set_font("10px sans-serif");
	ctx.set_fill_style_str("#666666");
	let _ = ctx.fill_text(&node.year_label, node.x, node.y + node.radius + 30.0);

	ctx.set_global_alpha(1.0);
}

fn draw_popup(
	node_x: f64,
	node_y: f64,
	detail: &PartyDetail,
	canvas_width: f64,
	ctx: &CanvasRenderingContext2d,
) {
	use super::style::NODE_RADIUS;

	// Prefer the right side of the node; flip left at the canvas edge.
	let mut x = node_x + NODE_RADIUS + 10.0;
	if x + POPUP_WIDTH > canvas_width {
		x = node_x - NODE_RADIUS - 10.0 - POPUP_WIDTH;
	}
	let y = (node_y - NODE_RADIUS - 80.0).max(TOP_MARGIN);

	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(x, y, POPUP_WIDTH, POPUP_HEIGHT);
	ctx.set_stroke_style_str("#cccccc");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(x, y, POPUP_WIDTH, POPUP_HEIGHT);

	ctx.set_text_align("left");
	ctx.set_fill_style_str("#333333");
	ctx.set_font("bold 14px sans-serif");
	let _ = ctx.fill_text(&detail.full_name, x + 20.0, y + 25.0);

	ctx.set_font("12px sans-serif");
	let mut line_y = y + 45.0;

	if !detail.founders.is_empty() {
		ctx.set_fill_style_str("#555555");
		let _ = ctx.fill_text(&format!("Founders: {}", detail.founders), x + 20.0, line_y);
		line_y += 20.0;
	}

	let status_color = if detail.armed {
		"#ff0000"
	} else if detail.status.eq_ignore_ascii_case("active") {
		"#4CAF50"
	} else {
		"#999999"
	};
	let mut status = format!("Status: {}", detail.status);
	if detail.armed {
		status.push_str(" (armed)");
	}
	if !detail.start_year.is_empty() {
		status.push_str(&format!(" ({}", detail.start_year));
		if !detail.end_year.is_empty() {
			status.push_str(&format!("-{}", detail.end_year));
		}
		status.push(')');
	}
	ctx.set_fill_style_str(status_color);
	let _ = ctx.fill_text(&status, x + 20.0, line_y);
	line_y += 20.0;

	if !detail.website.is_empty() {
		ctx.set_fill_style_str("#1976d2");
		let _ = ctx.fill_text(&format!("Web: {}", detail.website), x + 20.0, line_y);
		line_y += 20.0;
	}

	if !detail.info.is_empty() {
		ctx.set_fill_style_str("#555555");
		let _ = ctx.fill_text(&detail.info, x + 20.0, line_y);
	}
}
