use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::layout::AxisPolicy;
use super::render;
use super::state::ChartState;
use super::types::ChartData;

/// Canvas chart of the lineage timeline. Lays the dataset out once per
/// data change and forwards mouse gestures to the interaction state.
#[component]
pub fn LineageChartCanvas(
	#[prop(into)] data: Signal<ChartData>,
	#[prop(default = AxisPolicy::DecadeCentered)] policy: AxisPolicy,
	#[prop(default = None)] width: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ChartState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let w = width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(1300.0)
		});
		let chart = ChartState::new(data.get(), w, policy);
		let h = chart.scale().canvas_height();
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(chart);

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref s) = *state_anim.borrow() {
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let cursor_position = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = cursor_position(&ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			match s.node_at_position(x, y) {
				Some(id) => s.hover(&id),
				None => s.unhover(),
			}
		}
	};

	// A press on a node toggles its selection; a press on empty canvas
	// clears any selection.
	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let (x, y) = cursor_position(&ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			match s.node_at_position(x, y) {
				Some(id) => s.click(&id),
				None => s.clear_selection(),
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.unhover();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="lineage-chart-canvas"
			on:mousemove=on_mousemove
			on:mousedown=on_mousedown
			on:mouseleave=on_mouseleave
			style="display: block; cursor: pointer;"
		/>
	}
}
