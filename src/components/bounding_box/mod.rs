//! Draw-and-resize bounding box tool.

mod component;
mod render;
mod state;

pub use component::BoundingBoxCanvas;
pub use state::{BoxState, BoxToolState, Corner, DragTarget, Point};
