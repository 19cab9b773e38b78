/// Identifier of a node; nodes of an `n`-node graph are numbered `0..n`.
pub type NodeId = usize;

/// A graph vertex with an optional display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	/// Position of the node in generation order.
	pub id: NodeId,
	/// Placeholder filename shown next to the node.
	pub label: Option<String>,
}

/// A directed connection between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Tail of the edge.
	pub from: NodeId,
	/// Head of the edge.
	pub to: NodeId,
}

impl Edge {
	/// The same connection pointing the other way.
	pub fn flipped(self) -> Self {
		Self {
			from: self.to,
			to: self.from,
		}
	}
}

/// Nodes and edges produced by a single generation call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
	/// Nodes ordered by id.
	pub nodes: Vec<Node>,
	/// Edges ordered by the child they attach.
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Root of a generated tree, or `None` for an empty graph.
	pub fn root(&self) -> Option<NodeId> {
		self.nodes.first().map(|n| n.id)
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
