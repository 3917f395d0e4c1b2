// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use crate::path_builder::PathBuilder;
use crate::transform::Transform;
use crate::{Point, Rect};

/// A path verb.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum PathVerb {
    Move,
    Line,
    Quad,
    Conic,
    Cubic,
    Close,
}

/// A Bezier path.
///
/// Can be created via [`PathBuilder`].
/// Where [`PathBuilder`] can be created from the [`Path`] using [`clear`] to reuse the allocation.
///
/// Path is immutable and uses compact storage, where segment types and numbers are stored
/// separately. Use can access path segments via [`Path::verbs`], [`Path::points`]
/// and [`Path::conic_weights`], or via [`Path::segments`].
///
/// # Guarantees
///
/// - Has a valid, precomputed bounds.
/// - All points are finite.
/// - All conic weights are finite and positive.
/// - Has at least two segments.
/// - Each contour starts with a MoveTo.
/// - No duplicated Move.
/// - No duplicated Close.
/// - Zero-length contours are allowed.
///
/// [`PathBuilder`]: struct.PathBuilder.html
/// [`clear`]: struct.Path.html#method.clear
#[derive(Clone, PartialEq)]
pub struct Path {
    pub(crate) verbs: Vec<PathVerb>,
    pub(crate) points: Vec<Point>,
    pub(crate) conic_weights: Vec<f32>,
    pub(crate) bounds: Rect,
}

impl Path {
    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Checks if path is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bounds of the path's points.
    ///
    /// The value is already calculated.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns an internal vector of verbs.
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Returns an internal vector of points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns an internal vector of conic weights.
    ///
    /// Contains one value per `PathVerb::Conic`, in verbs order.
    pub fn conic_weights(&self) -> &[f32] {
        &self.conic_weights
    }

    /// Returns a transformed in-place path.
    ///
    /// Some points may become NaN/inf therefore this method can fail.
    pub fn transform(mut self, ts: Transform) -> Option<Self> {
        if ts.is_identity() {
            return Some(self);
        }

        ts.map_points(&mut self.points);

        // Update bounds.
        self.bounds = Rect::from_points(&self.points)?;

        Some(self)
    }

    /// Returns an iterator over path's segments.
    pub fn segments(&self) -> PathSegmentsIter {
        PathSegmentsIter {
            path: self,
            verb_index: 0,
            points_index: 0,
            weights_index: 0,
            last_move_to: Point::zero(),
            last_point: Point::zero(),
        }
    }

    /// Clears the path and returns a `PathBuilder` that will reuse an allocated memory.
    pub fn clear(mut self) -> PathBuilder {
        self.verbs.clear();
        self.points.clear();
        self.conic_weights.clear();

        PathBuilder {
            verbs: self.verbs,
            points: self.points,
            conic_weights: self.conic_weights,
            last_move_to_index: 0,
            move_to_required: true,
        }
    }
}

impl core::fmt::Debug for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Write;

        let mut s = alloc::string::String::new();
        for segment in self.segments() {
            match segment {
                PathSegment::MoveTo(p) => s.write_fmt(format_args!("M {} {} ", p.x, p.y))?,
                PathSegment::LineTo(p) => s.write_fmt(format_args!("L {} {} ", p.x, p.y))?,
                PathSegment::QuadTo(p0, p1) => {
                    s.write_fmt(format_args!("Q {} {} {} {} ", p0.x, p0.y, p1.x, p1.y))?
                }
                PathSegment::ConicTo(p0, p1, w) => s.write_fmt(format_args!(
                    "K {} {} {} {} {} ",
                    p0.x, p0.y, p1.x, p1.y, w
                ))?,
                PathSegment::CubicTo(p0, p1, p2) => s.write_fmt(format_args!(
                    "C {} {} {} {} {} {} ",
                    p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
                ))?,
                PathSegment::Close => s.write_fmt(format_args!("Z "))?,
            }
        }

        s.pop(); // ' '

        f.debug_struct("Path")
            .field("segments", &s)
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// A path segment.
///
/// The start point of every drawing segment is the end point of the previous one.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    /// Control point, end point and weight.
    ConicTo(Point, Point, f32),
    CubicTo(Point, Point, Point),
    Close,
}

/// A path segments iterator.
#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct PathSegmentsIter<'a> {
    path: &'a Path,
    verb_index: usize,
    points_index: usize,
    weights_index: usize,

    last_move_to: Point,
    last_point: Point,
}

impl<'a> PathSegmentsIter<'a> {
    /// Returns the next verb.
    pub fn next_verb(&self) -> Option<PathVerb> {
        self.path.verbs.get(self.verb_index).cloned()
    }

    /// Returns the end point of the last returned segment.
    ///
    /// After `Close` this is the start of the closed contour.
    pub fn last_point(&self) -> Point {
        self.last_point
    }
}

impl<'a> Iterator for PathSegmentsIter<'a> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let verb = *self.path.verbs.get(self.verb_index)?;
        self.verb_index += 1;

        match verb {
            PathVerb::Move => {
                self.points_index += 1;
                self.last_move_to = self.path.points[self.points_index - 1];
                self.last_point = self.last_move_to;
                Some(PathSegment::MoveTo(self.last_move_to))
            }
            PathVerb::Line => {
                self.points_index += 1;
                self.last_point = self.path.points[self.points_index - 1];
                Some(PathSegment::LineTo(self.last_point))
            }
            PathVerb::Quad => {
                self.points_index += 2;
                self.last_point = self.path.points[self.points_index - 1];
                Some(PathSegment::QuadTo(
                    self.path.points[self.points_index - 2],
                    self.last_point,
                ))
            }
            PathVerb::Conic => {
                self.points_index += 2;
                self.weights_index += 1;
                self.last_point = self.path.points[self.points_index - 1];
                Some(PathSegment::ConicTo(
                    self.path.points[self.points_index - 2],
                    self.last_point,
                    self.path.conic_weights[self.weights_index - 1],
                ))
            }
            PathVerb::Cubic => {
                self.points_index += 3;
                self.last_point = self.path.points[self.points_index - 1];
                Some(PathSegment::CubicTo(
                    self.path.points[self.points_index - 3],
                    self.path.points[self.points_index - 2],
                    self.last_point,
                ))
            }
            PathVerb::Close => {
                self.last_point = self.last_move_to;
                Some(PathSegment::Close)
            }
        }
    }
}
