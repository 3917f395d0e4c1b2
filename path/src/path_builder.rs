// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// NOTE: this is not SkPathBuilder, but rather a reimplementation of SkPath.

use alloc::vec;
use alloc::vec::Vec;

use crate::{Path, Point, Rect};

use crate::path::PathVerb;
use crate::scalar::{Scalar, SCALAR_ROOT_2_OVER_2};

/// A path builder.
#[derive(Clone, Default, Debug)]
pub struct PathBuilder {
    pub(crate) verbs: Vec<PathVerb>,
    pub(crate) points: Vec<Point>,
    pub(crate) conic_weights: Vec<f32>,
    pub(crate) last_move_to_index: usize,
    pub(crate) move_to_required: bool,
}

impl PathBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        PathBuilder {
            verbs: Vec::new(),
            points: Vec::new(),
            conic_weights: Vec::new(),
            last_move_to_index: 0,
            move_to_required: true,
        }
    }

    /// Creates a new builder with a specified capacity.
    ///
    /// Number of points depends on a verb type:
    ///
    /// - Move - 1
    /// - Line - 1
    /// - Quad - 2
    /// - Conic - 2
    /// - Cubic - 3
    /// - Close - 0
    pub fn with_capacity(verbs_capacity: usize, points_capacity: usize) -> Self {
        PathBuilder {
            verbs: Vec::with_capacity(verbs_capacity),
            points: Vec::with_capacity(points_capacity),
            conic_weights: Vec::new(),
            last_move_to_index: 0,
            move_to_required: true,
        }
    }

    /// Creates a new `Path` from `Rect`.
    ///
    /// Never fails since `Rect` is always valid.
    ///
    /// Segments are created clockwise: TopLeft -> TopRight -> BottomRight -> BottomLeft
    ///
    /// The contour is closed.
    pub fn from_rect(rect: Rect) -> Path {
        let verbs = vec![
            PathVerb::Move,
            PathVerb::Line,
            PathVerb::Line,
            PathVerb::Line,
            PathVerb::Close,
        ];

        let points = vec![
            Point::from_xy(rect.left(), rect.top()),
            Point::from_xy(rect.right(), rect.top()),
            Point::from_xy(rect.right(), rect.bottom()),
            Point::from_xy(rect.left(), rect.bottom()),
        ];

        Path {
            bounds: rect,
            verbs,
            points,
            conic_weights: Vec::new(),
        }
    }

    /// Creates a new `Path` from a circle.
    ///
    /// See [`PathBuilder::push_circle`] for details.
    pub fn from_circle(cx: f32, cy: f32, radius: f32) -> Option<Path> {
        let mut b = PathBuilder::new();
        b.push_circle(cx, cy, radius);
        b.finish()
    }

    /// Creates a new `Path` from an oval.
    ///
    /// See [`PathBuilder::push_oval`] for details.
    pub fn from_oval(oval: Rect) -> Option<Path> {
        let mut b = PathBuilder::new();
        b.push_oval(oval);
        b.finish()
    }

    /// Returns the current number of segments in the builder.
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Checks if the builder has any segments added.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Adds beginning of a contour.
    ///
    /// Multiple continuous MoveTo segments are not allowed.
    /// If the previous segment was also MoveTo, it will be overwritten with the current one.
    pub fn move_to(&mut self, x: f32, y: f32) {
        if let Some(PathVerb::Move) = self.verbs.last() {
            let last_idx = self.points.len() - 1;
            self.points[last_idx] = Point::from_xy(x, y);
        } else {
            self.last_move_to_index = self.points.len();
            self.move_to_required = false;

            self.verbs.push(PathVerb::Move);
            self.points.push(Point::from_xy(x, y));
        }
    }

    fn inject_move_to_if_needed(&mut self) {
        if self.move_to_required {
            match self.points.get(self.last_move_to_index).cloned() {
                Some(p) => self.move_to(p.x, p.y),
                None => self.move_to(0.0, 0.0),
            }
        }
    }

    /// Adds a line from the last point.
    ///
    /// - If `Path` is empty - adds Move(0, 0) first.
    /// - If `Path` ends with Close - adds Move(last_x, last_y) first.
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.inject_move_to_if_needed();

        self.verbs.push(PathVerb::Line);
        self.points.push(Point::from_xy(x, y));
    }

    /// Adds a quad curve from the last point to `x`, `y`.
    ///
    /// - If `Path` is empty - adds Move(0, 0) first.
    /// - If `Path` ends with Close - adds Move(last_x, last_y) first.
    pub fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.inject_move_to_if_needed();

        self.verbs.push(PathVerb::Quad);
        self.points.push(Point::from_xy(x1, y1));
        self.points.push(Point::from_xy(x, y));
    }

    /// Adds a quad curve from the last point to `p`.
    pub fn quad_to_pt(&mut self, p1: Point, p: Point) {
        self.quad_to(p1.x, p1.y, p.x, p.y);
    }

    /// Adds a conic curve from the last point to `x`, `y`.
    ///
    /// Degenerate weights are simplified:
    ///
    /// - Zero, negative or NaN `weight` - adds a line to `x`, `y`.
    /// - Infinite `weight` - adds two lines through the control point.
    /// - `weight` equal to one - adds a quad curve.
    pub fn conic_to(&mut self, x1: f32, y1: f32, x: f32, y: f32, weight: f32) {
        // check for <= 0 or NaN with this test
        if !(weight > 0.0) {
            self.line_to(x, y);
        } else if !weight.is_finite() {
            self.line_to(x1, y1);
            self.line_to(x, y);
        } else if weight == 1.0 {
            self.quad_to(x1, y1, x, y);
        } else {
            self.inject_move_to_if_needed();

            self.verbs.push(PathVerb::Conic);
            self.points.push(Point::from_xy(x1, y1));
            self.points.push(Point::from_xy(x, y));
            self.conic_weights.push(weight);
        }
    }

    /// Adds a conic curve from the last point to `pt2`.
    pub fn conic_points_to(&mut self, pt1: Point, pt2: Point, weight: f32) {
        self.conic_to(pt1.x, pt1.y, pt2.x, pt2.y, weight);
    }

    /// Adds a cubic curve from the last point to `x`, `y`.
    ///
    /// - If `Path` is empty - adds Move(0, 0) first.
    /// - If `Path` ends with Close - adds Move(last_x, last_y) first.
    pub fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.inject_move_to_if_needed();

        self.verbs.push(PathVerb::Cubic);
        self.points.push(Point::from_xy(x1, y1));
        self.points.push(Point::from_xy(x2, y2));
        self.points.push(Point::from_xy(x, y));
    }

    /// Adds a cubic curve from the last point to `p`.
    pub fn cubic_to_pt(&mut self, p1: Point, p2: Point, p: Point) {
        self.cubic_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y);
    }

    /// Closes the current contour.
    ///
    /// A closed contour connects the first and the last Point
    /// with a line, forming a continuous loop.
    ///
    /// Does nothing when `Path` is empty or already closed.
    pub fn close(&mut self) {
        // don't add a close if it's the first verb or a repeat
        if !self.verbs.is_empty() {
            if self.verbs.last().cloned() != Some(PathVerb::Close) {
                self.verbs.push(PathVerb::Close);
            }
        }

        self.move_to_required = true;
    }

    /// Returns the last point if any.
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().cloned()
    }

    /// Adds an oval contour bounded by the provided rectangle.
    ///
    /// The contour starts at the right edge center, is made of four conic
    /// quarter-arcs, is closed and has a clock-wise direction.
    pub fn push_oval(&mut self, oval: Rect) {
        let cx = oval.left().half() + oval.right().half();
        let cy = oval.top().half() + oval.bottom().half();

        let oval_points = [
            Point::from_xy(cx, oval.bottom()),
            Point::from_xy(oval.left(), cy),
            Point::from_xy(cx, oval.top()),
            Point::from_xy(oval.right(), cy),
        ];

        let rect_points = [
            Point::from_xy(oval.right(), oval.bottom()),
            Point::from_xy(oval.left(), oval.bottom()),
            Point::from_xy(oval.left(), oval.top()),
            Point::from_xy(oval.right(), oval.top()),
        ];

        let weight = SCALAR_ROOT_2_OVER_2;
        self.move_to(oval_points[3].x, oval_points[3].y);
        for (p1, p2) in rect_points.iter().zip(oval_points.iter()) {
            self.conic_points_to(*p1, *p2, weight);
        }
        self.close();
    }

    /// Adds a circle contour.
    ///
    /// The contour is closed and has a clock-wise direction.
    ///
    /// Does nothing when:
    /// - `radius` <= 0
    /// - any value is not finite or really large
    pub fn push_circle(&mut self, x: f32, y: f32, r: f32) {
        if !(r > 0.0) {
            return;
        }

        if let Some(r) = Rect::from_xywh(x - r, y - r, r + r, r + r) {
            self.push_oval(r);
        }
    }

    /// Appends all contours of `other`.
    ///
    /// A trailing MoveTo of the current builder is dropped, since it doesn't
    /// start any geometry.
    pub fn push_path(&mut self, other: &Path) {
        if other.is_empty() {
            return;
        }

        if let Some(PathVerb::Move) = self.verbs.last() {
            self.verbs.pop();
            self.points.pop();
        }

        let points_offset = self.points.len();
        let mut last_move_to_index = None;
        let mut points_index = 0;
        for verb in &other.verbs {
            match verb {
                PathVerb::Move => {
                    last_move_to_index = Some(points_index);
                    points_index += 1;
                }
                PathVerb::Line => points_index += 1,
                PathVerb::Quad | PathVerb::Conic => points_index += 2,
                PathVerb::Cubic => points_index += 3,
                PathVerb::Close => {}
            }
        }

        self.verbs.extend_from_slice(&other.verbs);
        self.points.extend_from_slice(&other.points);
        self.conic_weights.extend_from_slice(&other.conic_weights);

        if let Some(index) = last_move_to_index {
            self.last_move_to_index = points_offset + index;
        }

        self.move_to_required = other.verbs.last() == Some(&PathVerb::Close);
    }

    /// Reset the builder.
    ///
    /// Memory is not deallocated.
    pub fn clear(&mut self) {
        self.verbs.clear();
        self.points.clear();
        self.conic_weights.clear();
        self.last_move_to_index = 0;
        self.move_to_required = true;
    }

    /// Finishes the builder and returns a `Path`.
    ///
    /// Returns `None` when `Path` is empty or has invalid bounds.
    pub fn finish(self) -> Option<Path> {
        if self.is_empty() {
            return None;
        }

        // Just a move to? Bail.
        if self.verbs.len() == 1 {
            return None;
        }

        let bounds = Rect::from_points(&self.points)?;

        Some(Path {
            bounds,
            verbs: self.verbs,
            points: self.points,
            conic_weights: self.conic_weights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathSegment;

    #[test]
    fn conic_weights() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.conic_to(10.0, 0.0, 10.0, 10.0, 0.5);
        pb.conic_to(10.0, 20.0, 0.0, 20.0, 1.0);
        pb.conic_to(0.0, 30.0, 0.0, 40.0, 0.0);
        pb.conic_to(5.0, 45.0, 0.0, 50.0, f32::INFINITY);
        let path = pb.finish().unwrap();

        assert_eq!(path.conic_weights(), &[0.5]);
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            &[
                PathSegment::MoveTo(Point::from_xy(0.0, 0.0)),
                PathSegment::ConicTo(Point::from_xy(10.0, 0.0), Point::from_xy(10.0, 10.0), 0.5),
                PathSegment::QuadTo(Point::from_xy(10.0, 20.0), Point::from_xy(0.0, 20.0)),
                PathSegment::LineTo(Point::from_xy(0.0, 40.0)),
                PathSegment::LineTo(Point::from_xy(5.0, 45.0)),
                PathSegment::LineTo(Point::from_xy(0.0, 50.0)),
            ]
        );
    }

    #[test]
    fn circle_is_four_conics() {
        let path = PathBuilder::from_circle(0.0, 0.0, 10.0).unwrap();
        assert_eq!(
            path.verbs(),
            &[
                PathVerb::Move,
                PathVerb::Conic,
                PathVerb::Conic,
                PathVerb::Conic,
                PathVerb::Conic,
                PathVerb::Close,
            ]
        );
        assert_eq!(path.conic_weights().len(), 4);
        assert_eq!(path.points()[0], Point::from_xy(10.0, 0.0));
        assert_eq!(path.points()[2], Point::from_xy(0.0, 10.0));

        assert!(PathBuilder::from_circle(0.0, 0.0, 0.0).is_none());
        assert!(PathBuilder::from_circle(0.0, 0.0, -1.0).is_none());
    }

    #[test]
    fn push_path_after_move() {
        let mut stamp = PathBuilder::new();
        stamp.move_to(1.0, 1.0);
        stamp.line_to(2.0, 2.0);
        let stamp = stamp.finish().unwrap();

        let mut pb = PathBuilder::new();
        pb.move_to(5.0, 5.0);
        pb.push_path(&stamp);
        pb.line_to(3.0, 3.0);
        let path = pb.finish().unwrap();

        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            &[
                PathSegment::MoveTo(Point::from_xy(1.0, 1.0)),
                PathSegment::LineTo(Point::from_xy(2.0, 2.0)),
                PathSegment::LineTo(Point::from_xy(3.0, 3.0)),
            ]
        );
    }

    #[test]
    fn push_closed_path() {
        let rect = PathBuilder::from_rect(Rect::from_xywh(0.0, 0.0, 2.0, 2.0).unwrap());

        let mut pb = PathBuilder::new();
        pb.push_path(&rect);
        pb.line_to(5.0, 5.0);
        let path = pb.finish().unwrap();

        // A line after Close starts a new contour at the last MoveTo.
        assert_eq!(path.verbs()[5], PathVerb::Move);
        assert_eq!(path.points()[4], Point::from_xy(0.0, 0.0));
    }
}
