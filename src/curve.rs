// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use contour_measure_path::path_geometry::{self, Conic};
use contour_measure_path::{NormalizedF32, NormalizedF32Exclusive, PathBuilder, Point};

/// A single drawing curve of a contour.
///
/// The first point is always the curve start and the last one is the curve end.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Curve {
    Line([Point; 2]),
    Quad([Point; 3]),
    /// Control points and weight.
    Conic([Point; 3], f32),
    Cubic([Point; 4]),
}

impl Curve {
    /// Returns the curve start point.
    pub fn start(&self) -> Point {
        match *self {
            Curve::Line(ref pts) => pts[0],
            Curve::Quad(ref pts) => pts[0],
            Curve::Conic(ref pts, _) => pts[0],
            Curve::Cubic(ref pts) => pts[0],
        }
    }

    /// Returns the curve end point.
    pub fn end(&self) -> Point {
        match *self {
            Curve::Line(ref pts) => pts[1],
            Curve::Quad(ref pts) => pts[2],
            Curve::Conic(ref pts, _) => pts[2],
            Curve::Cubic(ref pts) => pts[3],
        }
    }

    /// Returns a position and a normalized tangent at `t`.
    ///
    /// The tangent is zero when the curve is degenerate at `t`.
    pub fn pos_tan(&self, t: NormalizedF32) -> (Point, Point) {
        let (pos, mut tangent) = match *self {
            Curve::Line(ref pts) => (
                lerp(pts[0], pts[1], t.get()),
                Point::from_xy(pts[1].x - pts[0].x, pts[1].y - pts[0].y),
            ),
            Curve::Quad(ref pts) => (
                path_geometry::eval_quad_at(pts, t),
                path_geometry::eval_quad_tangent_at(pts, t),
            ),
            Curve::Conic(ref pts, weight) => {
                let conic = Conic::from_points(pts, weight);
                (conic.eval_at(t), conic.eval_tangent_at(t))
            }
            Curve::Cubic(ref pts) => (
                path_geometry::eval_cubic_pos_at(pts, t),
                path_geometry::eval_cubic_tangent_at(pts, t),
            ),
        };

        tangent.normalize();
        (pos, tangent)
    }

    /// Splits the curve at `t` into two curves of the same kind.
    ///
    /// Returns `None` only when a conic split produces non-finite values.
    pub fn split_at(&self, t: NormalizedF32Exclusive) -> Option<(Curve, Curve)> {
        match *self {
            Curve::Line([p0, p1]) => {
                let mid = lerp(p0, p1, t.get());
                Some((Curve::Line([p0, mid]), Curve::Line([mid, p1])))
            }
            Curve::Quad(ref pts) => {
                let (head, tail) = split_quad(pts, t);
                Some((Curve::Quad(head), Curve::Quad(tail)))
            }
            Curve::Conic(ref pts, weight) => {
                let [head, tail] = Conic::from_points(pts, weight).chop_at(t)?;
                Some((
                    Curve::Conic(head.points, head.weight),
                    Curve::Conic(tail.points, tail.weight),
                ))
            }
            Curve::Cubic(ref pts) => {
                let (head, tail) = split_cubic(pts, t);
                Some((Curve::Cubic(head), Curve::Cubic(tail)))
            }
        }
    }

    /// Returns the part of the curve between `start_t` and `stop_t`.
    ///
    /// `start_t` must not be bigger than `stop_t`. Equal values produce
    /// a degenerate curve, so callers should handle them separately.
    pub fn split_range(&self, start_t: NormalizedF32, stop_t: NormalizedF32) -> Curve {
        debug_assert!(start_t <= stop_t);

        match *self {
            Curve::Line([p0, p1]) => {
                let start = if start_t == NormalizedF32::ZERO {
                    p0
                } else {
                    lerp(p0, p1, start_t.get())
                };

                let stop = if stop_t == NormalizedF32::ONE {
                    p1
                } else {
                    lerp(p0, p1, stop_t.get())
                };

                Curve::Line([start, stop])
            }
            Curve::Quad(ref pts) => {
                Curve::Quad(split_range_with(pts, start_t, stop_t, split_quad))
            }
            Curve::Conic(ref pts, weight) => {
                let conic = Conic::from_points(pts, weight).chop_range(start_t, stop_t);
                Curve::Conic(conic.points, conic.weight)
            }
            Curve::Cubic(ref pts) => {
                Curve::Cubic(split_range_with(pts, start_t, stop_t, split_cubic))
            }
        }
    }

    /// Appends the part of the curve between `start_t` and `stop_t` to the builder.
    ///
    /// The builder's current point is expected to be at `start_t`.
    pub(crate) fn segment_to(
        &self,
        start_t: NormalizedF32,
        stop_t: NormalizedF32,
        pb: &mut PathBuilder,
    ) {
        debug_assert!(start_t <= stop_t);

        if start_t == stop_t {
            if let Some(pt) = pb.last_point() {
                // If the dash as a zero-length on segment, add a corresponding zero-length line.
                // The stroke code will add end caps to zero length lines as appropriate.
                pb.line_to(pt.x, pt.y);
            }

            return;
        }

        self.split_range(start_t, stop_t).append_to(pb);
    }

    /// Appends the curve without its start point to the builder.
    pub(crate) fn append_to(&self, pb: &mut PathBuilder) {
        match *self {
            Curve::Line(ref pts) => pb.line_to(pts[1].x, pts[1].y),
            Curve::Quad(ref pts) => pb.quad_to_pt(pts[1], pts[2]),
            Curve::Conic(ref pts, weight) => pb.conic_points_to(pts[1], pts[2], weight),
            Curve::Cubic(ref pts) => pb.cubic_to_pt(pts[1], pts[2], pts[3]),
        }
    }
}

fn split_quad(pts: &[Point; 3], t: NormalizedF32Exclusive) -> ([Point; 3], [Point; 3]) {
    let mut tmp = [Point::zero(); 5];
    path_geometry::chop_quad_at(pts, t, &mut tmp);
    ([tmp[0], tmp[1], tmp[2]], [tmp[2], tmp[3], tmp[4]])
}

fn split_cubic(pts: &[Point; 4], t: NormalizedF32Exclusive) -> ([Point; 4], [Point; 4]) {
    let mut tmp = [Point::zero(); 7];
    path_geometry::chop_cubic_at2(pts, t, &mut tmp);
    (
        [tmp[0], tmp[1], tmp[2], tmp[3]],
        [tmp[3], tmp[4], tmp[5], tmp[6]],
    )
}

fn split_range_with<T: Copy>(
    pts: &T,
    start_t: NormalizedF32,
    stop_t: NormalizedF32,
    split: fn(&T, NormalizedF32Exclusive) -> (T, T),
) -> T {
    if start_t == NormalizedF32::ZERO {
        if stop_t == NormalizedF32::ONE {
            *pts
        } else {
            split(pts, NormalizedF32Exclusive::new_bounded(stop_t.get())).0
        }
    } else {
        let (_, tail) = split(pts, NormalizedF32Exclusive::new_bounded(start_t.get()));
        if stop_t == NormalizedF32::ONE {
            tail
        } else {
            // Map `stop_t` into the tail's own parameter space.
            let new_t = (stop_t.get() - start_t.get()) / (1.0 - start_t.get());
            split(&tail, NormalizedF32Exclusive::new_bounded(new_t)).0
        }
    }
}

fn lerp(a: Point, b: Point, t: f32) -> Point {
    Point::from_xy(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use contour_measure_path::{PathSegment, SCALAR_ROOT_2_OVER_2};

    fn t(n: f32) -> NormalizedF32 {
        NormalizedF32::new(n).unwrap()
    }

    fn assert_near(a: Point, b: Point) {
        assert!(a.equals_within_tolerance(b, 1e-4), "{:?} != {:?}", a, b);
    }

    fn quad() -> Curve {
        Curve::Quad([
            Point::from_xy(0.0, 0.0),
            Point::from_xy(10.0, 20.0),
            Point::from_xy(20.0, 0.0),
        ])
    }

    fn cubic() -> Curve {
        Curve::Cubic([
            Point::from_xy(0.0, 0.0),
            Point::from_xy(0.0, 10.0),
            Point::from_xy(10.0, 10.0),
            Point::from_xy(10.0, 0.0),
        ])
    }

    fn quarter_circle() -> Curve {
        Curve::Conic(
            [
                Point::from_xy(10.0, 0.0),
                Point::from_xy(10.0, 10.0),
                Point::from_xy(0.0, 10.0),
            ],
            SCALAR_ROOT_2_OVER_2,
        )
    }

    #[test]
    fn line_pos_tan() {
        let line = Curve::Line([Point::from_xy(0.0, 0.0), Point::from_xy(0.0, 8.0)]);
        let (pos, tan) = line.pos_tan(t(0.25));
        assert_eq!(pos, Point::from_xy(0.0, 2.0));
        assert_eq!(tan, Point::from_xy(0.0, 1.0));
    }

    #[test]
    fn degenerate_line_has_zero_tangent() {
        let line = Curve::Line([Point::from_xy(3.0, 3.0), Point::from_xy(3.0, 3.0)]);
        let (pos, tan) = line.pos_tan(t(0.5));
        assert_eq!(pos, Point::from_xy(3.0, 3.0));
        assert!(tan.is_zero());
    }

    #[test]
    fn tangents_are_normalized() {
        for curve in &[quad(), cubic(), quarter_circle()] {
            for n in &[0.0, 0.3, 0.5, 1.0] {
                let (_, tan) = curve.pos_tan(t(*n));
                assert!((tan.length() - 1.0).abs() < 1e-5, "{:?} at {}", curve, n);
            }
        }
    }

    #[test]
    fn conic_pos_tan() {
        let (pos, tan) = quarter_circle().pos_tan(t(0.5));
        let r = 10.0 * SCALAR_ROOT_2_OVER_2;
        assert_near(pos, Point::from_xy(r, r));
        assert_near(tan, Point::from_xy(-SCALAR_ROOT_2_OVER_2, SCALAR_ROOT_2_OVER_2));
    }

    #[test]
    fn split_at_keeps_geometry() {
        for curve in &[quad(), cubic(), quarter_circle()] {
            let (head, tail) = curve.split_at(NormalizedF32Exclusive::HALF).unwrap();
            let (mid, _) = curve.pos_tan(t(0.5));

            assert_eq!(head.start(), curve.start());
            assert_near(head.end(), mid);
            assert_near(tail.start(), mid);
            assert_eq!(tail.end(), curve.end());
        }
    }

    #[test]
    fn split_range_endpoints() {
        for curve in &[quad(), cubic(), quarter_circle()] {
            assert_eq!(curve.split_range(t(0.0), t(1.0)), *curve);

            let part = curve.split_range(t(0.2), t(0.7));
            assert_near(part.start(), curve.pos_tan(t(0.2)).0);
            assert_near(part.end(), curve.pos_tan(t(0.7)).0);

            let head = curve.split_range(t(0.0), t(0.4));
            assert_eq!(head.start(), curve.start());
            assert_near(head.end(), curve.pos_tan(t(0.4)).0);

            let tail = curve.split_range(t(0.6), t(1.0));
            assert_near(tail.start(), curve.pos_tan(t(0.6)).0);
            assert_eq!(tail.end(), curve.end());
        }
    }

    #[test]
    fn split_line_range() {
        let line = Curve::Line([Point::from_xy(0.0, 0.0), Point::from_xy(10.0, 0.0)]);
        assert_eq!(
            line.split_range(t(0.5), t(1.0)),
            Curve::Line([Point::from_xy(5.0, 0.0), Point::from_xy(10.0, 0.0)])
        );
    }

    #[test]
    fn zero_length_segment_to() {
        let mut pb = PathBuilder::new();
        pb.move_to(5.0, 5.0);
        quad().segment_to(t(0.5), t(0.5), &mut pb);
        let path = pb.finish().unwrap();

        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            &[
                PathSegment::MoveTo(Point::from_xy(5.0, 5.0)),
                PathSegment::LineTo(Point::from_xy(5.0, 5.0)),
            ]
        );

        // Nothing to continue from.
        let mut pb = PathBuilder::new();
        quad().segment_to(t(0.5), t(0.5), &mut pb);
        assert!(pb.is_empty());
    }

    #[test]
    fn conic_segment_to_keeps_conic() {
        let mut pb = PathBuilder::new();
        pb.move_to(10.0, 0.0);
        quarter_circle().segment_to(t(0.0), t(1.0), &mut pb);
        let path = pb.finish().unwrap();

        assert_eq!(
            path.segments().last(),
            Some(PathSegment::ConicTo(
                Point::from_xy(10.0, 10.0),
                Point::from_xy(0.0, 10.0),
                SCALAR_ROOT_2_OVER_2
            ))
        );
    }
}
