//! Random tree generation.
//!
//! Every node after the root attaches to a parent picked among the nodes
//! generated before it, so the result is always a tree rooted at node 0.

use super::model::{Edge, Graph, Node, NodeId};

/// Node count used when nothing else is requested.
pub const DEFAULT_TREE_SIZE: usize = 10;

/// Largest node count the pages accept. Larger trees exhaust wasm memory
/// and make every simulation frame quadratic in the node count.
pub const MAX_TREE_SIZE: usize = 5_000;

/// Label given to every generated node.
pub const PLACEHOLDER_FILENAME: &str = "test";

/// A source of uniformly distributed reals in `[0, 1)`.
pub trait UniformSource {
	/// Draw the next value.
	fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> UniformSource for F {
	fn next_unit(&mut self) -> f64 {
		self()
	}
}

/// The browser's `Math.random()`. Only usable on `wasm32` targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl UniformSource for MathRandom {
	fn next_unit(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Size and orientation of a generated tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeOptions {
	/// Number of nodes.
	pub size: usize,
	/// Point edges from child to parent instead of parent to child.
	pub reverse: bool,
}

impl Default for TreeOptions {
	fn default() -> Self {
		Self {
			size: DEFAULT_TREE_SIZE,
			reverse: false,
		}
	}
}

/// Parent of `child` for the uniform draw `u`.
///
/// Scales `u` onto `[0, child - 1]` and rounds to the nearest integer, so the
/// two end points are half as likely as the interior ones. The root
/// (`child == 0`) has nowhere to attach and maps to itself.
pub fn pick_parent(child: NodeId, u: f64) -> NodeId {
	let last = child.saturating_sub(1);
	// Casting saturates, so a misbehaving source still lands in range.
	((u * last as f64).round() as NodeId).min(last)
}

/// Generate a random tree of `options.size` nodes.
///
/// Draws exactly one value from `rng` per non-root node, in id order.
pub fn gen_random_tree<R: UniformSource + ?Sized>(options: TreeOptions, rng: &mut R) -> Graph {
	let nodes = (0..options.size)
		.map(|id| Node {
			id,
			label: Some(PLACEHOLDER_FILENAME.to_string()),
		})
		.collect();

	let edges = (1..options.size)
		.map(|child| {
			let edge = Edge {
				from: pick_parent(child, rng.next_unit()),
				to: child,
			};
			if options.reverse { edge.flipped() } else { edge }
		})
		.collect();

	Graph { nodes, edges }
}
