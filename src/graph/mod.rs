//! Canonical graph model, the random tree generator, and widget adapters.

mod model;
mod random;
mod shape;

pub use model::{Edge, Graph, Node, NodeId};
pub use random::{
	DEFAULT_TREE_SIZE, MAX_TREE_SIZE, MathRandom, PLACEHOLDER_FILENAME, TreeOptions, UniformSource,
	gen_random_tree, pick_parent,
};
pub use shape::{
	ForceGraphData, ForceLink, ForceNode, GraphShape, RelationGraphData, RelationLink,
	RelationNode, ShapedGraph,
};
