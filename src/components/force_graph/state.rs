use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use crate::graph::{ForceGraphData, ForceNode, NodeId};

/// Distance of the initial ring of nodes from the canvas center.
const SEED_RADIUS: f64 = 100.0;

/// Force simulation seeded from force-graph data, plus the canvas size.
pub struct Simulation {
	pub graph: ForceGraph<ForceNode, ()>,
	pub width: f64,
	pub height: f64,
}

impl Simulation {
	pub fn new(data: &ForceGraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut index = HashMap::new();
		let count = data.nodes.len().max(1) as f64;

		// Simulation coordinates are centered on the origin.
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = i as f64 * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: (SEED_RADIUS * angle.cos()) as f32,
				y: (SEED_RADIUS * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: node.clone(),
			});
			index.insert(node.id, idx);
		}

		for link in &data.links {
			let lookup = |id: NodeId| index.get(&id).copied();
			match (lookup(link.source), lookup(link.target)) {
				(Some(src), Some(tgt)) => {
					graph.add_edge(src, tgt, EdgeData::default());
				}
				_ => warn!(
					"Dropping link {} -> {}: unknown endpoint",
					link.source, link.target
				),
			}
		}

		Self {
			graph,
			width,
			height,
		}
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
