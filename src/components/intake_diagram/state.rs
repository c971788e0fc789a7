use std::collections::{HashMap, HashSet};

use super::types::{DiagramData, DiagramGraph};
use super::validate::find_unreachable;

pub const NODE_RADIUS: f64 = 18.0;
pub const HIT_RADIUS: f64 = 22.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_id: Option<String>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// A positioned diagram symbol.
#[derive(Clone, Debug)]
pub struct Symbol {
	pub id: String,
	pub label: Option<String>,
	pub x: f64,
	pub y: f64,
}

/// State behind the intake-diagram canvas: the symbols and their adjacency,
/// the view transform, the in-flight drag, and the ids flagged by the last
/// validation run.
pub struct DiagramState {
	pub symbols: Vec<Symbol>,
	pub graph: DiagramGraph,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub flagged: HashSet<String>,
	pub width: f64,
	pub height: f64,
	root_id: String,
	positions: HashMap<String, usize>,
}

impl DiagramState {
	pub fn new(data: &DiagramData, root_id: String, width: f64, height: f64) -> Self {
		let symbols: Vec<Symbol> = data
			.nodes
			.iter()
			.map(|n| Symbol {
				id: n.id.clone(),
				label: n.label.clone(),
				x: n.x,
				y: n.y,
			})
			.collect();
		let positions = symbols
			.iter()
			.enumerate()
			.map(|(i, s)| (s.id.clone(), i))
			.collect();

		Self {
			symbols,
			graph: DiagramGraph::from_data(data),
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			flagged: HashSet::new(),
			width,
			height,
			root_id,
			positions,
		}
	}

	pub fn symbol(&self, id: &str) -> Option<&Symbol> {
		self.positions.get(id).map(|&i| &self.symbols[i])
	}

	pub fn symbol_mut(&mut self, id: &str) -> Option<&mut Symbol> {
		self.positions.get(id).map(|&i| &mut self.symbols[i])
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn symbol_at_position(&self, sx: f64, sy: f64) -> Option<String> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		for symbol in &self.symbols {
			let (dx, dy) = (symbol.x - gx, symbol.y - gy);
			// HIT_RADIUS is in world-space, scales with zoom like symbols
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(symbol.id.clone());
			}
		}
		found
	}

	/// Re-run the connectivity check from the configured root, replacing the
	/// previous run's highlighting wholesale.
	pub fn validate(&mut self) {
		self.flagged = find_unreachable(&self.graph, &self.root_id);
	}

	pub fn is_flagged(&self, id: &str) -> bool {
		self.flagged.contains(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::intake_diagram::types::{DiagramLink, DiagramNode};

	fn sample() -> DiagramData {
		DiagramData {
			nodes: vec![
				DiagramNode {
					id: "river".into(),
					label: Some("River".into()),
					x: 50.0,
					y: 50.0,
				},
				DiagramNode {
					id: "intake".into(),
					label: Some("Intake".into()),
					x: 200.0,
					y: 50.0,
				},
				DiagramNode {
					id: "orphan".into(),
					label: None,
					x: 350.0,
					y: 200.0,
				},
			],
			links: vec![DiagramLink {
				id: "c1".into(),
				source: Some("river".into()),
				target: Some("intake".into()),
			}],
		}
	}

	#[test]
	fn validate_flags_the_disconnected_symbol() {
		let mut state = DiagramState::new(&sample(), "river".into(), 800.0, 600.0);
		assert!(state.flagged.is_empty());
		state.validate();
		assert!(state.is_flagged("orphan"));
		assert!(!state.is_flagged("river"));
		assert!(!state.is_flagged("intake"));
		assert!(!state.is_flagged("c1"));
	}

	#[test]
	fn revalidation_clears_stale_flags() {
		let mut data = sample();
		let mut state = DiagramState::new(&data, "river".into(), 800.0, 600.0);
		state.validate();
		assert!(state.is_flagged("orphan"));

		// Connect the orphan and rebuild, as the editor would after an edit.
		data.links.push(DiagramLink {
			id: "c2".into(),
			source: Some("intake".into()),
			target: Some("orphan".into()),
		});
		state.graph = DiagramGraph::from_data(&data);
		state.validate();
		assert!(state.flagged.is_empty());
	}

	#[test]
	fn hit_testing_respects_the_view_transform() {
		let mut state = DiagramState::new(&sample(), "river".into(), 800.0, 600.0);
		assert_eq!(state.symbol_at_position(52.0, 48.0).as_deref(), Some("river"));
		assert_eq!(state.symbol_at_position(500.0, 500.0), None);

		state.transform = ViewTransform {
			x: 100.0,
			y: 0.0,
			k: 2.0,
		};
		// river now appears at screen (200, 100)
		assert_eq!(state.symbol_at_position(200.0, 100.0).as_deref(), Some("river"));
	}

	#[test]
	fn dragging_a_symbol_updates_its_position() {
		let mut state = DiagramState::new(&sample(), "river".into(), 800.0, 600.0);
		let s = state.symbol_mut("intake").unwrap();
		s.x = 220.0;
		s.y = 80.0;
		assert_eq!(state.symbol("intake").map(|s| (s.x, s.y)), Some((220.0, 80.0)));
	}
}
