use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::Simulation;
use crate::graph::ForceNode;

pub const NODE_RADIUS: f64 = 4.0;
const BACKGROUND: &str = "#ffffff";
const LINK_COLOR: &str = "rgba(0, 0, 0, 0.2)";
const NODE_COLOR: &str = "#1f77b4";
const LABEL_COLOR: &str = "#333333";

/// Paint one frame. `on_node` is called once per painted node.
pub fn render(
	sim: &Simulation,
	ctx: &CanvasRenderingContext2d,
	on_node: &mut dyn FnMut(&ForceNode),
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, sim.width, sim.height);
	ctx.save();
	let _ = ctx.translate(sim.width / 2.0, sim.height / 2.0);

	ctx.set_stroke_style_str(LINK_COLOR);
	ctx.set_line_width(1.0);
	sim.graph.visit_edges(|n1, n2, _| {
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});

	ctx.set_font("10px sans-serif");
	sim.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(NODE_COLOR);
		ctx.fill();

		let data = &node.data.user_data;
		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(&data.filename, x + NODE_RADIUS + 2.0, y + 3.0);
		on_node(data);
	});

	ctx.restore();
}
