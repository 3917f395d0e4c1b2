// Copyright 2014 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use contour_measure_path::path_geometry::{self, Conic};
use contour_measure_path::{NormalizedF32, NormalizedF32Exclusive, PathSegment, PathSegmentsIter};
use contour_measure_path::{PathVerb, Point};

use crate::contour_measure::ContourMeasure;
use crate::curve::Curve;
use crate::curviness::{self, MAX_SUBDIVISION_DEPTH, MAX_T_VALUE};

/// A flattened piece of a contour.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct Segment {
    /// Total distance up to the end of this segment.
    pub distance: f32,
    /// Index into the contour curves.
    pub curve_index: usize,
    /// The curve parameter at the end of this segment.
    pub t: f32,
}

/// Accumulates the segments table of a single contour.
///
/// As we accumulate distance, we have to check that the result of +=
/// actually made it larger, since a very small delta might be > 0, but
/// still have no effect on distance (if distance >>> delta).
/// Curves that didn't make the distance larger are not stored at all.
struct SegmentTableBuilder {
    segments: Vec<Segment>,
    curves: Vec<Curve>,
    distance: f32,
    tolerance: f32,
}

impl SegmentTableBuilder {
    fn new(tolerance: f32) -> Self {
        SegmentTableBuilder {
            segments: Vec::new(),
            curves: Vec::new(),
            distance: 0.0,
            tolerance,
        }
    }

    fn push_curve(&mut self, curve: Curve) {
        let segments_count = self.segments.len();
        match curve {
            Curve::Line([p0, p1]) => self.push_segment(p0.distance(p1), MAX_T_VALUE),
            Curve::Quad(ref pts) => self.compute_quad_segs(pts, 0, MAX_T_VALUE, 0),
            Curve::Conic(ref pts, weight) => {
                let conic = Conic::from_points(pts, weight);
                self.compute_conic_segs(&conic, 0, pts[0], MAX_T_VALUE, pts[2], 0);
            }
            Curve::Cubic(ref pts) => self.compute_cubic_segs(pts, 0, MAX_T_VALUE, 0),
        }

        if self.segments.len() > segments_count {
            self.curves.push(curve);
        }
    }

    // Segments always reference the curve that will be pushed next.
    fn push_segment(&mut self, d: f32, t_value: u32) {
        debug_assert!(!(d < 0.0));
        let prev_d = self.distance;
        self.distance += d;
        if self.distance > prev_d {
            self.segments.push(Segment {
                distance: self.distance,
                curve_index: self.curves.len(),
                t: curviness::t_value_to_scalar(t_value),
            });
        }
    }

    fn compute_quad_segs(&mut self, pts: &[Point; 3], min_t: u32, max_t: u32, depth: u32) {
        debug_assert!(depth <= MAX_SUBDIVISION_DEPTH);

        if curviness::t_span_big_enough(max_t - min_t)
            && curviness::quad_too_curvy(pts[0], pts[1], pts[2], self.tolerance)
        {
            let mut tmp = [Point::zero(); 5];
            let half_t = (min_t + max_t) >> 1;

            path_geometry::chop_quad_at(pts, NormalizedF32Exclusive::HALF, &mut tmp);
            self.compute_quad_segs(&[tmp[0], tmp[1], tmp[2]], min_t, half_t, depth + 1);
            self.compute_quad_segs(&[tmp[2], tmp[3], tmp[4]], half_t, max_t, depth + 1);
        } else {
            self.push_segment(pts[0].distance(pts[2]), max_t);
        }
    }

    fn compute_cubic_segs(&mut self, pts: &[Point; 4], min_t: u32, max_t: u32, depth: u32) {
        debug_assert!(depth <= MAX_SUBDIVISION_DEPTH);

        if curviness::t_span_big_enough(max_t - min_t)
            && curviness::cubic_too_curvy(pts[0], pts[1], pts[2], pts[3], self.tolerance)
        {
            let mut tmp = [Point::zero(); 7];
            let half_t = (min_t + max_t) >> 1;

            path_geometry::chop_cubic_at2(pts, NormalizedF32Exclusive::HALF, &mut tmp);
            self.compute_cubic_segs(&[tmp[0], tmp[1], tmp[2], tmp[3]], min_t, half_t, depth + 1);
            self.compute_cubic_segs(&[tmp[3], tmp[4], tmp[5], tmp[6]], half_t, max_t, depth + 1);
        } else {
            self.push_segment(pts[0].distance(pts[3]), max_t);
        }
    }

    // Conics are not chopped. Each step evaluates the original curve
    // at the middle of the current t-span instead.
    fn compute_conic_segs(
        &mut self,
        conic: &Conic,
        min_t: u32,
        min_pt: Point,
        max_t: u32,
        max_pt: Point,
        depth: u32,
    ) {
        debug_assert!(depth <= MAX_SUBDIVISION_DEPTH);

        let half_t = (min_t + max_t) >> 1;
        let half_pt = conic.eval_at(NormalizedF32::new_clamped(curviness::t_value_to_scalar(
            half_t,
        )));
        if !half_pt.is_finite() {
            return;
        }

        if curviness::t_span_big_enough(max_t - min_t)
            && curviness::conic_too_curvy(min_pt, half_pt, max_pt, self.tolerance)
        {
            self.compute_conic_segs(conic, min_t, min_pt, half_t, half_pt, depth + 1);
            self.compute_conic_segs(conic, half_t, half_pt, max_t, max_pt, depth + 1);
        } else {
            self.push_segment(min_pt.distance(max_pt), max_t);
        }
    }
}

/// Builds a measure for the next contour of the path.
///
/// Consumes segments up to the next MoveTo. Returns `None` when the contour
/// has no length or the length is not finite. The caller should try the next contour then.
pub(crate) fn build_contour(
    iter: &mut PathSegmentsIter,
    force_closed: bool,
    tolerance: f32,
) -> Option<ContourMeasure> {
    let mut builder = SegmentTableBuilder::new(tolerance);

    let mut have_seen_close = force_closed;
    let mut first_pt = None;
    let mut prev_pt = Point::zero();
    while let Some(seg) = iter.next() {
        match seg {
            PathSegment::MoveTo(p0) => {
                debug_assert!(first_pt.is_none());
                first_pt = Some(p0);
                prev_pt = p0;
            }
            PathSegment::LineTo(p0) => {
                builder.push_curve(Curve::Line([prev_pt, p0]));
                prev_pt = p0;
            }
            PathSegment::QuadTo(p0, p1) => {
                builder.push_curve(Curve::Quad([prev_pt, p0, p1]));
                prev_pt = p1;
            }
            PathSegment::ConicTo(p0, p1, weight) => {
                builder.push_curve(Curve::Conic([prev_pt, p0, p1], weight));
                prev_pt = p1;
            }
            PathSegment::CubicTo(p0, p1, p2) => {
                builder.push_curve(Curve::Cubic([prev_pt, p0, p1, p2]));
                prev_pt = p2;
            }
            PathSegment::Close => {
                have_seen_close = true;
            }
        }

        if iter.next_verb() == Some(PathVerb::Move) {
            break;
        }
    }

    if builder.segments.is_empty() {
        tracing::debug!("contour discarded: zero length");
        return None;
    }

    if have_seen_close {
        // Close from the end of the last measured curve.
        let last_pt = builder.curves.last().map(|c| c.end()).unwrap_or(prev_pt);
        let first_pt = first_pt.unwrap_or(last_pt);
        builder.push_curve(Curve::Line([last_pt, first_pt]));
    }

    // The closing line can overflow too.
    if !builder.distance.is_finite() {
        tracing::debug!(
            distance = builder.distance,
            "contour discarded: non-finite length"
        );
        return None;
    }

    tracing::trace!(
        segments = builder.segments.len(),
        curves = builder.curves.len(),
        length = builder.distance,
        closed = have_seen_close,
        "contour measured"
    );

    Some(ContourMeasure::new(
        builder.segments,
        builder.curves,
        builder.distance,
        have_seen_close,
    ))
}
