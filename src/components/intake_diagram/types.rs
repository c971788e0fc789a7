use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct DiagramNode {
	pub id: String,
	pub label: Option<String>,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug)]
pub struct DiagramLink {
	pub id: String,
	pub source: Option<String>,
	pub target: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct DiagramData {
	pub nodes: Vec<DiagramNode>,
	pub links: Vec<DiagramLink>,
}

/// A node as the validator sees it: its id plus every incident edge id,
/// whether the node is that edge's source or its target.
#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub edges: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct GraphEdge {
	pub id: String,
	pub source: Option<String>,
	pub target: Option<String>,
}

/// Read-only adjacency view over the diagram, keyed by cell id. Owned by the
/// diagram state; the validator only traverses it.
#[derive(Clone, Debug, Default)]
pub struct DiagramGraph {
	nodes: HashMap<String, GraphNode>,
	edges: HashMap<String, GraphEdge>,
}

impl DiagramGraph {
	pub fn from_data(data: &DiagramData) -> Self {
		let mut nodes: HashMap<String, GraphNode> = data
			.nodes
			.iter()
			.map(|n| {
				(
					n.id.clone(),
					GraphNode {
						id: n.id.clone(),
						edges: Vec::new(),
					},
				)
			})
			.collect();
		let mut edges = HashMap::new();

		for link in &data.links {
			for endpoint in [&link.source, &link.target] {
				if let Some(id) = endpoint {
					if let Some(node) = nodes.get_mut(id) {
						node.edges.push(link.id.clone());
					}
				}
			}
			edges.insert(
				link.id.clone(),
				GraphEdge {
					id: link.id.clone(),
					source: link.source.clone(),
					target: link.target.clone(),
				},
			);
		}

		Self { nodes, edges }
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.get(id)
	}

	pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
		self.edges.get(id)
	}

	pub fn node_ids(&self) -> impl Iterator<Item = &str> {
		self.nodes.keys().map(String::as_str)
	}

	pub fn edge_ids(&self) -> impl Iterator<Item = &str> {
		self.edges.keys().map(String::as_str)
	}
}
