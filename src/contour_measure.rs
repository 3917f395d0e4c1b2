// Copyright 2014 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::sync::Arc;
use alloc::vec::Vec;

use contour_measure_path::{NormalizedF32, Path, PathBuilder, Point, Scalar, Transform};

use crate::builder::Segment;
use crate::curve::Curve;

/// What [`ContourMeasure::matrix`] should include.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MatrixFlags {
    /// Translate to the position.
    Position,
    /// Rotate along the tangent.
    Tangent,
    /// Rotate along the tangent and then translate to the position.
    PositionAndTangent,
}

impl Default for MatrixFlags {
    fn default() -> Self {
        MatrixFlags::PositionAndTangent
    }
}

impl MatrixFlags {
    fn has_position(self) -> bool {
        self != MatrixFlags::Tangent
    }

    fn has_tangent(self) -> bool {
        self != MatrixFlags::Position
    }
}

#[derive(Debug)]
struct ContourData {
    segments: Vec<Segment>,
    curves: Vec<Curve>,
    length: f32,
    is_closed: bool,
}

/// A measured contour.
///
/// Produced by [`ContourMeasureIter`](crate::ContourMeasureIter).
///
/// Stores a flattened representation of a single path contour and allows
/// querying positions, tangents and parts of it by a distance along the contour.
///
/// Immutable and cheap to clone. Clones share the same data,
/// which can be queried from multiple threads at once.
///
/// # Guarantees
///
/// - Has at least one segment.
/// - Segment distances are finite and strictly increasing.
/// - The length is positive and finite.
#[derive(Clone, Debug)]
pub struct ContourMeasure(Arc<ContourData>);

impl ContourMeasure {
    pub(crate) fn new(
        segments: Vec<Segment>,
        curves: Vec<Curve>,
        length: f32,
        is_closed: bool,
    ) -> Self {
        debug_assert!(!segments.is_empty());
        debug_assert!(length.is_finite() && length > 0.0);

        ContourMeasure(Arc::new(ContourData {
            segments,
            curves,
            length,
            is_closed,
        }))
    }

    /// Returns the length of the contour.
    pub fn length(&self) -> f32 {
        self.0.length
    }

    /// Checks that the contour is closed.
    ///
    /// Either explicitly, by a Close segment, or by forcing.
    pub fn is_closed(&self) -> bool {
        self.0.is_closed
    }

    /// Returns the number of flattened segments.
    pub fn segments_count(&self) -> usize {
        self.0.segments.len()
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.0.segments
    }

    pub(crate) fn curves(&self) -> &[Curve] {
        &self.0.curves
    }

    /// Returns a position and a unit tangent at the specified distance.
    ///
    /// `distance` is pinned to `0..=length`.
    ///
    /// Returns `None` when `distance` is NaN.
    pub fn pos_tan(&self, distance: f32) -> Option<(Point, Point)> {
        if distance.is_nan() {
            return None;
        }

        let distance = distance.bound(0.0, self.length());
        let (index, t) = self.distance_to_segment(distance)?;
        let curve = &self.0.curves[self.0.segments[index].curve_index];
        Some(curve.pos_tan(t))
    }

    /// Returns a transform at the specified distance.
    ///
    /// `distance` is pinned to `0..=length`.
    ///
    /// Returns `None` when `distance` is NaN.
    pub fn matrix(&self, distance: f32, flags: MatrixFlags) -> Option<Transform> {
        let (pos, tangent) = self.pos_tan(distance)?;

        let mut ts = Transform::identity();
        if flags.has_tangent() {
            ts = Transform::from_sin_cos(tangent.y, tangent.x);
        }

        if flags.has_position() {
            ts = ts.post_translate(pos.x, pos.y);
        }

        Some(ts)
    }

    /// Appends a part of the contour between two distances to the builder.
    ///
    /// Distances are pinned to `0..=length`.
    /// When `start_with_move_to` is set, the part starts with a MoveTo.
    ///
    /// Returns `None` when `start_d > stop_d` or any of them is NaN.
    pub fn push_segment(
        &self,
        mut start_d: f32,
        mut stop_d: f32,
        start_with_move_to: bool,
        pb: &mut PathBuilder,
    ) -> Option<()> {
        if start_d < 0.0 {
            start_d = 0.0;
        }

        if stop_d > self.length() {
            stop_d = self.length();
        }

        if !(start_d <= stop_d) {
            // catch NaN values as well
            return None;
        }

        let (start_index, start_t) = self.distance_to_segment(start_d)?;
        let (stop_index, stop_t) = self.distance_to_segment(stop_d)?;
        debug_assert!(start_index <= stop_index);

        let curves = &self.0.curves;
        let start_curve = self.0.segments[start_index].curve_index;
        let stop_curve = self.0.segments[stop_index].curve_index;

        if start_with_move_to {
            let (p, _) = curves[start_curve].pos_tan(start_t);
            pb.move_to(p.x, p.y);
        }

        if start_curve == stop_curve {
            curves[start_curve].segment_to(start_t, stop_t, pb);
        } else {
            curves[start_curve].segment_to(start_t, NormalizedF32::ONE, pb);
            for curve in &curves[start_curve + 1..stop_curve] {
                curve.append_to(pb);
            }
            curves[stop_curve].segment_to(NormalizedF32::ZERO, stop_t, pb);
        }

        Some(())
    }

    /// Returns a part of the contour between two distances as a new path.
    ///
    /// See [`ContourMeasure::push_segment`] for details.
    pub fn segment(&self, start_d: f32, stop_d: f32, start_with_move_to: bool) -> Option<Path> {
        let mut pb = PathBuilder::new();
        self.push_segment(start_d, stop_d, start_with_move_to, &mut pb)?;
        pb.finish()
    }

    fn distance_to_segment(&self, distance: f32) -> Option<(usize, NormalizedF32)> {
        debug_assert!(distance >= 0.0 && distance <= self.length());

        let segments = &self.0.segments;

        // The first segment with `distance >= key`.
        let index = segments
            .partition_point(|seg| seg.distance < distance)
            .min(segments.len().checked_sub(1)?);
        let seg = segments[index];

        // now interpolate t-values with the prev segment (if possible)
        let mut start_t = 0.0;
        let mut start_d = 0.0;
        // check if the prev segment is legal, and references the same curve
        if index > 0 {
            start_d = segments[index - 1].distance;
            if segments[index - 1].curve_index == seg.curve_index {
                start_t = segments[index - 1].t;
            }
        }

        debug_assert!(seg.t > start_t);
        debug_assert!(distance >= start_d);
        debug_assert!(seg.distance > start_d);

        let t = start_t + (seg.t - start_t) * (distance - start_d) / (seg.distance - start_d);
        if !t.is_finite() {
            return None;
        }

        Some((index, NormalizedF32::new_clamped(t)))
    }
}
