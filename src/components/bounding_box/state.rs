use std::ops::{Add, Neg, Sub};

pub const STROKE_WIDTH: f64 = 3.0;
pub const CIRCLE_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 12.0;

/// A coordinate pair in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

impl Add for Point {
	type Output = Point;
	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;
	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Neg for Point {
	type Output = Point;
	fn neg(self) -> Point {
		Point::new(-self.x, -self.y)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
	TopLeft,
	TopRight,
	BottomLeft,
	BottomRight,
}

impl Corner {
	pub const ALL: [Corner; 4] = [
		Corner::TopLeft,
		Corner::TopRight,
		Corner::BottomLeft,
		Corner::BottomRight,
	];
}

/// The four corners of an axis-aligned rectangle. Every operation keeps the
/// corners consistent: vertical neighbours share x, horizontal neighbours
/// share y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxState {
	pub top_left: Point,
	pub top_right: Point,
	pub bottom_left: Point,
	pub bottom_right: Point,
}

impl BoxState {
	/// Derive all four corners from the two ends of a draw gesture, with
	/// `start` and `end` as one diagonal pair (`start` is the top-left by
	/// convention). Zero-area boxes are fine.
	pub fn from_drag(start: Point, end: Point) -> Self {
		Self {
			top_left: start,
			top_right: Point::new(end.x, start.y),
			bottom_left: Point::new(start.x, end.y),
			bottom_right: end,
		}
	}

	pub fn corner(&self, corner: Corner) -> Point {
		match corner {
			Corner::TopLeft => self.top_left,
			Corner::TopRight => self.top_right,
			Corner::BottomLeft => self.bottom_left,
			Corner::BottomRight => self.bottom_right,
		}
	}

	/// Move one corner to `p`. The two adjacent corners inherit the shared
	/// coordinate; the diagonally opposite corner stays put.
	pub fn update_corner(&mut self, corner: Corner, p: Point) {
		match corner {
			Corner::TopLeft => {
				self.top_left = p;
				self.top_right.y = p.y;
				self.bottom_left.x = p.x;
			}
			Corner::TopRight => {
				self.top_right = p;
				self.top_left.y = p.y;
				self.bottom_right.x = p.x;
			}
			Corner::BottomLeft => {
				self.bottom_left = p;
				self.bottom_right.y = p.y;
				self.top_left.x = p.x;
			}
			Corner::BottomRight => {
				self.bottom_right = p;
				self.bottom_left.y = p.y;
				self.top_right.x = p.x;
			}
		}
	}

	/// Shift the whole box, preserving shape and size.
	pub fn translate(&mut self, delta: Point) {
		self.top_left = self.top_left + delta;
		self.top_right = self.top_right + delta;
		self.bottom_left = self.bottom_left + delta;
		self.bottom_right = self.bottom_right + delta;
	}

	/// The nearest corner within `radius` of `p`, if any.
	pub fn corner_at(&self, p: Point, radius: f64) -> Option<Corner> {
		let mut best: Option<(Corner, f64)> = None;
		for corner in Corner::ALL {
			let d = self.corner(corner).distance(p);
			if d < radius && best.is_none_or(|(_, bd)| d < bd) {
				best = Some((corner, d));
			}
		}
		best.map(|(c, _)| c)
	}

	/// Whether `p` falls inside the box (corners may be drawn in any order,
	/// so normalise before comparing).
	pub fn contains(&self, p: Point) -> bool {
		let (x0, x1) = min_max(self.top_left.x, self.bottom_right.x);
		let (y0, y1) = min_max(self.top_left.y, self.bottom_right.y);
		p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1
	}

	/// Ring of corners in draw order, closed back onto the first.
	pub fn outline(&self) -> [Point; 5] {
		[
			self.top_left,
			self.bottom_left,
			self.bottom_right,
			self.top_right,
			self.top_left,
		]
	}
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
	if a <= b { (a, b) } else { (b, a) }
}

/// What the active pointer gesture is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
	/// Stretching the initial two-point draw gesture.
	Draw,
	/// Resizing by one corner handle.
	Corner(Corner),
	/// Translating the whole box.
	Body,
}

/// One box-drawing session: at most one box at a time, mutated by pointer
/// gestures and consumed by the renderer after every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxToolState {
	pub box_state: Option<BoxState>,
	drag: Option<DragTarget>,
	draw_start: Point,
	drag_coordinate: Point,
}

impl BoxToolState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn dragging(&self) -> bool {
		self.drag.is_some()
	}

	/// What a press at `p` would grab, without starting a gesture.
	pub fn target_at(&self, p: Point) -> Option<DragTarget> {
		let b = self.box_state?;
		if let Some(corner) = b.corner_at(p, HIT_RADIUS) {
			Some(DragTarget::Corner(corner))
		} else if b.contains(p) {
			Some(DragTarget::Body)
		} else {
			None
		}
	}

	/// Cursor to show at `p` while no gesture is active: a pointer over a
	/// handle or the box body, the drawing crosshair everywhere else.
	pub fn hover_cursor(&self, p: Point) -> &'static str {
		if self.target_at(p).is_some() {
			"pointer"
		} else {
			"crosshair"
		}
	}

	pub fn pointer_down(&mut self, p: Point) {
		match self.box_state {
			None => {
				self.draw_start = p;
				self.box_state = Some(BoxState::from_drag(p, p));
				self.drag = Some(DragTarget::Draw);
			}
			Some(_) => {
				self.drag = self.target_at(p);
			}
		}
		self.drag_coordinate = p;
	}

	pub fn pointer_drag(&mut self, p: Point) {
		let Some(target) = self.drag else {
			return;
		};
		let Some(ref mut b) = self.box_state else {
			return;
		};
		match target {
			DragTarget::Draw => *b = BoxState::from_drag(self.draw_start, p),
			DragTarget::Corner(corner) => b.update_corner(corner, p),
			DragTarget::Body => b.translate(p - self.drag_coordinate),
		}
		self.drag_coordinate = p;
	}

	pub fn pointer_up(&mut self) {
		self.drag = None;
	}

	/// Discard the active box so the next press starts a new one.
	pub fn clear(&mut self) {
		self.box_state = None;
		self.drag = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn p(x: f64, y: f64) -> Point {
		Point::new(x, y)
	}

	fn assert_rectangular(b: &BoxState) {
		assert_eq!(b.top_left.x, b.bottom_left.x);
		assert_eq!(b.top_right.x, b.bottom_right.x);
		assert_eq!(b.top_left.y, b.top_right.y);
		assert_eq!(b.bottom_left.y, b.bottom_right.y);
	}

	#[test]
	fn from_drag_derives_all_four_corners() {
		let b = BoxState::from_drag(p(0.0, 0.0), p(10.0, 5.0));
		assert_eq!(b.top_left, p(0.0, 0.0));
		assert_eq!(b.top_right, p(10.0, 0.0));
		assert_eq!(b.bottom_left, p(0.0, 5.0));
		assert_eq!(b.bottom_right, p(10.0, 5.0));
		assert_rectangular(&b);
	}

	#[test]
	fn from_drag_allows_degenerate_boxes() {
		let b = BoxState::from_drag(p(3.0, 3.0), p(3.0, 3.0));
		assert_eq!(b.top_left, b.bottom_right);
		assert_rectangular(&b);
	}

	#[test]
	fn update_top_left_pulls_neighbours() {
		let mut b = BoxState::from_drag(p(0.0, 0.0), p(10.0, 5.0));
		b.update_corner(Corner::TopLeft, p(2.0, 1.0));
		assert_eq!(b.top_left, p(2.0, 1.0));
		assert_eq!(b.top_right, p(10.0, 1.0));
		assert_eq!(b.bottom_left, p(2.0, 5.0));
		assert_eq!(b.bottom_right, p(10.0, 5.0));
		assert_rectangular(&b);
	}

	#[test]
	fn opposite_corner_never_moves() {
		let mut b = BoxState::from_drag(p(0.0, 0.0), p(10.0, 5.0));
		b.update_corner(Corner::TopRight, p(12.0, -1.0));
		assert_eq!(b.bottom_left, p(0.0, 5.0));
		b.update_corner(Corner::BottomLeft, p(-2.0, 7.0));
		assert_eq!(b.top_right, p(12.0, -1.0));
		b.update_corner(Corner::BottomRight, p(9.0, 6.0));
		assert_eq!(b.top_left, p(-2.0, -1.0));
		assert_rectangular(&b);
	}

	#[test]
	fn invariant_survives_arbitrary_edit_sequences() {
		let mut b = BoxState::from_drag(p(4.0, -2.0), p(-6.0, 9.0));
		let edits = [
			(Corner::TopLeft, p(1.5, 2.5)),
			(Corner::BottomRight, p(-3.0, -4.0)),
			(Corner::BottomLeft, p(8.0, 0.5)),
			(Corner::TopRight, p(0.0, 0.0)),
		];
		for (corner, target) in edits {
			b.update_corner(corner, target);
			assert_eq!(b.corner(corner), target);
			assert_rectangular(&b);
			b.translate(p(0.25, -1.0));
			assert_rectangular(&b);
		}
	}

	#[test]
	fn translate_round_trips() {
		let original = BoxState::from_drag(p(1.0, 2.0), p(7.0, 11.0));
		let mut b = original;
		let delta = p(5.5, -3.25);
		b.translate(delta);
		assert_eq!(b.top_left, p(6.5, -1.25));
		b.translate(-delta);
		assert_eq!(b, original);
	}

	#[test]
	fn corner_hit_testing_prefers_nearest_corner() {
		let b = BoxState::from_drag(p(0.0, 0.0), p(100.0, 100.0));
		assert_eq!(b.corner_at(p(3.0, 2.0), HIT_RADIUS), Some(Corner::TopLeft));
		assert_eq!(
			b.corner_at(p(98.0, 4.0), HIT_RADIUS),
			Some(Corner::TopRight)
		);
		assert_eq!(b.corner_at(p(50.0, 50.0), HIT_RADIUS), None);
	}

	#[test]
	fn body_hits_only_when_no_corner_is_near() {
		let mut tool = BoxToolState::new();
		tool.pointer_down(p(0.0, 0.0));
		tool.pointer_drag(p(100.0, 100.0));
		tool.pointer_up();
		assert_eq!(tool.target_at(p(2.0, 2.0)), Some(DragTarget::Corner(Corner::TopLeft)));
		assert_eq!(tool.target_at(p(50.0, 50.0)), Some(DragTarget::Body));
		assert_eq!(tool.target_at(p(200.0, 200.0)), None);
	}

	#[test]
	fn draw_gesture_then_body_drag() {
		let mut tool = BoxToolState::new();
		tool.pointer_down(p(0.0, 0.0));
		tool.pointer_drag(p(100.0, 50.0));
		tool.pointer_up();
		let drawn = tool.box_state.unwrap();
		assert_eq!(drawn, BoxState::from_drag(p(0.0, 0.0), p(100.0, 50.0)));

		// Press well away from every corner handle, then drag in two steps.
		tool.pointer_down(p(50.0, 25.0));
		tool.pointer_drag(p(51.0, 27.0));
		tool.pointer_drag(p(52.0, 29.0));
		tool.pointer_up();
		let moved = tool.box_state.unwrap();
		assert_eq!(moved.top_left, p(2.0, 4.0));
		assert_eq!(moved.bottom_right, p(102.0, 54.0));
	}

	#[test]
	fn hover_cursor_swaps_over_handles_and_body() {
		let mut tool = BoxToolState::new();
		assert_eq!(tool.hover_cursor(p(10.0, 10.0)), "crosshair");

		tool.pointer_down(p(0.0, 0.0));
		tool.pointer_drag(p(100.0, 100.0));
		tool.pointer_up();
		assert_eq!(tool.hover_cursor(p(2.0, 2.0)), "pointer");
		assert_eq!(tool.hover_cursor(p(50.0, 50.0)), "pointer");
		assert_eq!(tool.hover_cursor(p(300.0, 300.0)), "crosshair");
	}

	#[test]
	fn clear_discards_the_active_box() {
		let mut tool = BoxToolState::new();
		tool.pointer_down(p(0.0, 0.0));
		tool.pointer_drag(p(4.0, 4.0));
		tool.pointer_up();
		tool.clear();
		assert!(tool.box_state.is_none());
		tool.pointer_down(p(20.0, 20.0));
		tool.pointer_drag(p(30.0, 25.0));
		assert_eq!(
			tool.box_state.unwrap(),
			BoxState::from_drag(p(20.0, 20.0), p(30.0, 25.0))
		);
	}
}
