//! Reachability check for the intake diagram.
//!
//! Everything a depth-first walk from the root never touches is reported so
//! the renderer can flag it as not connected. Nodes and edges share the
//! same accounting.

use std::collections::HashSet;

use super::types::DiagramGraph;

/// Ids of every cell (node or edge) not reachable from `root`.
///
/// The walk follows edges source-to-target only, skips edges with a missing
/// endpoint and self-loops, and carries an explicit visited set so cyclic
/// diagrams terminate. A `root` absent from the graph leaves the whole
/// diagram unreached.
pub fn find_unreachable(graph: &DiagramGraph, root: &str) -> HashSet<String> {
	let mut unvisited: HashSet<String> = graph
		.node_ids()
		.chain(graph.edge_ids())
		.map(str::to_owned)
		.collect();

	if graph.node(root).is_some() {
		let mut visited = HashSet::new();
		walk(graph, root, &mut visited, &mut unvisited);
	}

	unvisited
}

fn walk(
	graph: &DiagramGraph,
	node_id: &str,
	visited: &mut HashSet<String>,
	unvisited: &mut HashSet<String>,
) {
	if !visited.insert(node_id.to_owned()) {
		return;
	}
	let Some(node) = graph.node(node_id) else {
		return;
	};

	for edge_id in &node.edges {
		let Some(edge) = graph.edge(edge_id) else {
			continue;
		};
		let (Some(source), Some(target)) = (&edge.source, &edge.target) else {
			continue;
		};
		if target == node_id {
			continue;
		}

		unvisited.remove(edge_id);
		unvisited.remove(source);
		unvisited.remove(target);
		walk(graph, target, visited, unvisited);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::intake_diagram::types::{DiagramData, DiagramLink, DiagramNode};

	fn node(id: &str) -> DiagramNode {
		DiagramNode {
			id: id.into(),
			label: None,
			x: 0.0,
			y: 0.0,
		}
	}

	fn link(id: &str, source: Option<&str>, target: Option<&str>) -> DiagramLink {
		DiagramLink {
			id: id.into(),
			source: source.map(str::to_owned),
			target: target.map(str::to_owned),
		}
	}

	fn graph(nodes: &[&str], links: Vec<DiagramLink>) -> DiagramGraph {
		DiagramGraph::from_data(&DiagramData {
			nodes: nodes.iter().map(|id| node(id)).collect(),
			links,
		})
	}

	fn ids(values: &[&str]) -> HashSet<String> {
		values.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn unlinked_node_is_flagged() {
		let g = graph(&["a", "b", "c"], vec![link("e1", Some("a"), Some("b"))]);
		assert_eq!(find_unreachable(&g, "a"), ids(&["c"]));
	}

	#[test]
	fn cycle_terminates_and_flags_only_the_island() {
		let g = graph(
			&["a", "b", "c"],
			vec![
				link("e1", Some("a"), Some("b")),
				link("e2", Some("b"), Some("a")),
			],
		);
		assert_eq!(find_unreachable(&g, "a"), ids(&["c"]));
	}

	#[test]
	fn chain_is_followed_to_the_end() {
		let g = graph(
			&["a", "b", "c", "d"],
			vec![
				link("e1", Some("a"), Some("b")),
				link("e2", Some("b"), Some("c")),
				link("e3", Some("c"), Some("d")),
			],
		);
		assert!(find_unreachable(&g, "a").is_empty());
	}

	#[test]
	fn missing_root_leaves_everything_unreached() {
		let g = graph(&["a", "b"], vec![]);
		assert_eq!(find_unreachable(&g, "nope"), ids(&["a", "b"]));
	}

	#[test]
	fn dangling_edge_is_not_traversed_but_stays_flagged() {
		let g = graph(
			&["a", "b"],
			vec![
				link("e1", Some("a"), None),
				link("e2", Some("a"), Some("b")),
			],
		);
		assert_eq!(find_unreachable(&g, "a"), ids(&["e1"]));
	}

	#[test]
	fn self_loop_is_skipped() {
		let g = graph(
			&["a", "b"],
			vec![
				link("e1", Some("a"), Some("a")),
				link("e2", Some("a"), Some("b")),
			],
		);
		assert_eq!(find_unreachable(&g, "a"), ids(&["e1"]));
	}

	#[test]
	fn traversal_only_follows_edge_direction() {
		// b -> a means a cannot reach b by walking source-to-target.
		let g = graph(&["a", "b"], vec![link("e1", Some("b"), Some("a"))]);
		let unreachable = find_unreachable(&g, "a");
		assert!(unreachable.contains("b"));
		assert!(unreachable.contains("e1"));
		// Nothing was traversed, so even the root is still in the set.
		assert!(unreachable.contains("a"));
	}
}
