use std::cell::RefCell;
use std::rc::Rc;

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::state::Simulation;
use crate::graph::{ForceGraphData, ForceNode};

const FRAME_SECS: f32 = 0.016;

/// Browser resources owned by one mounted canvas.
#[derive(Default)]
struct FrameLoop {
	frame: Option<i32>,
	animate: Option<Closure<dyn FnMut()>>,
	resize: Option<Closure<dyn FnMut()>>,
}

impl FrameLoop {
	/// Cancel the pending frame, detach the resize listener and drop both
	/// closures. Only touches the window when there is something to release.
	fn stop(&mut self) {
		let frame = self.frame.take();
		let resize = self.resize.take();
		self.animate = None;
		if frame.is_none() && resize.is_none() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(id) = frame {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(cb) = resize {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
}

type LoopHandle = StoredValue<FrameLoop, LocalStorage>;

/// Stop the loop if its owner is still alive; a disposed handle is a no-op.
fn stop_loop(handle: LoopHandle) {
	let _ = handle.try_update_value(FrameLoop::stop);
}

/// Request the next frame, or end the loop once it was stopped or disposed.
fn schedule_frame(handle: LoopHandle) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let frame = handle
		.try_with_value(|l| {
			l.animate
				.as_ref()
				.and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
		})
		.flatten();
	let _ = handle.try_update_value(|l| l.frame = frame);
}

/// Per-node paint hook that ignores a callback whose owner is gone.
fn node_hook(callback: Option<Callback<ForceNode>>) -> impl FnMut(&ForceNode) {
	move |node: &ForceNode| {
		if let Some(cb) = callback {
			let _ = cb.try_run(node.clone());
		}
	}
}

fn inner_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Canvas running a force simulation over `data`.
///
/// `node_canvas_object` is invoked with each node's data every time the node
/// is painted. The animation loop and resize listener are released when the
/// component is unmounted.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<ForceGraphData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] node_canvas_object: Option<Callback<ForceNode>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop: LoopHandle = StoredValue::new_local(FrameLoop::default());

	on_cleanup(move || stop_loop(frame_loop));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("No window available, graph canvas stays blank");
			return;
		};
		// A rerun replaces the previous loop.
		stop_loop(frame_loop);

		let parent_size = |f: fn(&web_sys::Element) -> i32, fallback: f64| {
			canvas
				.parent_element()
				.map(|p| f(&p) as f64)
				.unwrap_or(fallback)
		};
		let (w, h) = match inner_size(&window) {
			Some(size) if fullscreen => size,
			_ => (
				width.unwrap_or_else(|| parent_size(web_sys::Element::client_width, 800.0)),
				height.unwrap_or_else(|| parent_size(web_sys::Element::client_height, 600.0)),
			),
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("Canvas has no 2d context");
			return;
		};
		let sim = Rc::new(RefCell::new(Simulation::new(&data.get(), w, h)));

		if fullscreen {
			let (sim_resize, canvas_resize) = (sim.clone(), canvas.clone());
			let resize: Closure<dyn FnMut()> = Closure::new(move || {
				let Some(size) = web_sys::window().as_ref().and_then(inner_size) else {
					return;
				};
				canvas_resize.set_width(size.0 as u32);
				canvas_resize.set_height(size.1 as u32);
				sim_resize.borrow_mut().resize(size.0, size.1);
			});
			let _ =
				window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
			frame_loop.update_value(|l| l.resize = Some(resize));
		}

		let mut on_node = node_hook(node_canvas_object);
		let animate: Closure<dyn FnMut()> = Closure::new(move || {
			{
				let mut s = sim.borrow_mut();
				s.tick(FRAME_SECS);
				render::render(&s, &ctx, &mut on_node);
			}
			schedule_frame(frame_loop);
		});
		frame_loop.update_value(|l| l.animate = Some(animate));
		schedule_frame(frame_loop);
	});

	view! { <canvas node_ref=canvas_ref class="force-graph-canvas" style="display: block;" /> }
}
