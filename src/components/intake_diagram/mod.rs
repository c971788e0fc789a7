//! Intake-process diagram with connectivity validation.

mod component;
mod render;
mod state;
mod types;
mod validate;

pub use component::IntakeDiagramCanvas;
pub use types::{DiagramData, DiagramGraph, DiagramLink, DiagramNode, GraphEdge, GraphNode};
pub use validate::find_unreachable;
