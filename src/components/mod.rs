//! Canvas widgets and their underlying models.

pub mod bounding_box;
pub mod intake_diagram;
