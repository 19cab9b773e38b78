//! Adapters from the canonical [`Graph`] to the layouts graph widgets expect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{Graph, NodeId};
use crate::error::ParamError;

/// Which widget convention a graph is serialized for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphShape {
	/// Numeric ids with `source`/`target` links.
	#[default]
	Force,
	/// String ids with `from`/`to` links and a `rootId`.
	Relation,
}

impl fmt::Display for GraphShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GraphShape::Force => f.write_str("force"),
			GraphShape::Relation => f.write_str("relation"),
		}
	}
}

impl FromStr for GraphShape {
	type Err = ParamError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"force" => Ok(GraphShape::Force),
			"relation" => Ok(GraphShape::Relation),
			_ => Err(ParamError::UnknownShape(s.to_string())),
		}
	}
}

/// Node as the force-directed widget expects it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceNode {
	/// Numeric node id.
	pub id: NodeId,
	/// Label drawn next to the node.
	pub filename: String,
}

/// Link with `source`/`target` endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceLink {
	/// Id of the tail node.
	pub source: NodeId,
	/// Id of the head node.
	pub target: NodeId,
}

/// Graph data in the force-directed widget's layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceGraphData {
	/// Nodes ordered by id.
	pub nodes: Vec<ForceNode>,
	/// Links ordered by child.
	pub links: Vec<ForceLink>,
}

impl From<&Graph> for ForceGraphData {
	fn from(graph: &Graph) -> Self {
		Self {
			nodes: graph
				.nodes
				.iter()
				.map(|n| ForceNode {
					id: n.id,
					filename: n.label.clone().unwrap_or_default(),
				})
				.collect(),
			links: graph
				.edges
				.iter()
				.map(|e| ForceLink {
					source: e.from,
					target: e.to,
				})
				.collect(),
		}
	}
}

/// Node as the relation widget expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationNode {
	/// Decimal string form of the node id.
	pub id: String,
	/// Label shown for the node.
	pub filename: String,
}

/// Link with `from`/`to` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationLink {
	/// Id of the tail node.
	pub from: String,
	/// Id of the head node.
	pub to: String,
}

/// Graph data in the relation widget's layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationGraphData {
	/// Id the widget lays the tree out from; absent for an empty graph.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub root_id: Option<String>,
	/// Nodes ordered by id.
	pub nodes: Vec<RelationNode>,
	/// Links ordered by child.
	pub links: Vec<RelationLink>,
}

impl From<&Graph> for RelationGraphData {
	fn from(graph: &Graph) -> Self {
		Self {
			root_id: graph.root().map(|id| id.to_string()),
			nodes: graph
				.nodes
				.iter()
				.map(|n| RelationNode {
					id: n.id.to_string(),
					filename: n.label.clone().unwrap_or_default(),
				})
				.collect(),
			links: graph
				.edges
				.iter()
				.map(|e| RelationLink {
					from: e.from.to_string(),
					to: e.to.to_string(),
				})
				.collect(),
		}
	}
}

/// A graph adapted to one of the [`GraphShape`] conventions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShapedGraph {
	/// Shape for the force-directed widget.
	Force(ForceGraphData),
	/// Shape for the relation widget.
	Relation(RelationGraphData),
}

impl ShapedGraph {
	/// Adapt `graph` for `shape`.
	pub fn new(graph: &Graph, shape: GraphShape) -> Self {
		match shape {
			GraphShape::Force => ShapedGraph::Force(graph.into()),
			GraphShape::Relation => ShapedGraph::Relation(graph.into()),
		}
	}

	/// Convention this value serializes to.
	pub fn shape(&self) -> GraphShape {
		match self {
			ShapedGraph::Force(_) => GraphShape::Force,
			ShapedGraph::Relation(_) => GraphShape::Relation,
		}
	}

	/// Pretty-printed JSON document.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::graph::model::{Edge, Node};

	fn sample() -> Graph {
		Graph {
			nodes: (0..3)
				.map(|id| Node {
					id,
					label: Some("test".into()),
				})
				.collect(),
			edges: vec![Edge { from: 0, to: 1 }, Edge { from: 1, to: 2 }],
		}
	}

	#[test]
	fn test_force_shape_json() {
		let value = serde_json::to_value(ShapedGraph::new(&sample(), GraphShape::Force)).unwrap();
		assert_eq!(
			value,
			json!({
				"nodes": [
					{"id": 0, "filename": "test"},
					{"id": 1, "filename": "test"},
					{"id": 2, "filename": "test"}
				],
				"links": [
					{"source": 0, "target": 1},
					{"source": 1, "target": 2}
				]
			})
		);
	}

	#[test]
	fn test_relation_shape_json() {
		let value =
			serde_json::to_value(ShapedGraph::new(&sample(), GraphShape::Relation)).unwrap();
		assert_eq!(
			value,
			json!({
				"rootId": "0",
				"nodes": [
					{"id": "0", "filename": "test"},
					{"id": "1", "filename": "test"},
					{"id": "2", "filename": "test"}
				],
				"links": [
					{"from": "0", "to": "1"},
					{"from": "1", "to": "2"}
				]
			})
		);
	}

	#[test]
	fn test_empty_relation_graph_omits_root() {
		let value =
			serde_json::to_value(ShapedGraph::new(&Graph::default(), GraphShape::Relation))
				.unwrap();
		assert_eq!(value, json!({"nodes": [], "links": []}));
	}

	#[test]
	fn test_unlabelled_node_gets_empty_filename() {
		let graph = Graph {
			nodes: vec![Node { id: 0, label: None }],
			edges: vec![],
		};
		let data = ForceGraphData::from(&graph);
		assert_eq!(data.nodes[0].filename, "");
	}

	#[test]
	fn test_shape_parsing() {
		assert_eq!("force".parse::<GraphShape>().unwrap(), GraphShape::Force);
		assert_eq!(" Relation ".parse::<GraphShape>().unwrap(), GraphShape::Relation);
		assert!(matches!(
			"tree".parse::<GraphShape>(),
			Err(ParamError::UnknownShape(s)) if s == "tree"
		));
		assert_eq!(GraphShape::Relation.to_string(), "relation");
	}

	#[test]
	fn test_shaped_graph_reports_shape() {
		let g = sample();
		assert_eq!(ShapedGraph::new(&g, GraphShape::Force).shape(), GraphShape::Force);
		assert!(
			ShapedGraph::new(&g, GraphShape::Relation)
				.to_json()
				.unwrap()
				.contains("\"rootId\": \"0\"")
		);
	}
}
