// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use contour_measure_path::{f32x2, Point, Scalar};

/// The fixed-point value of `t == 1` used while subdividing curves.
pub(crate) const MAX_T_VALUE: u32 = 0x3FFFFFFF;

/// The deepest subdivision allowed by `t_span_big_enough`.
///
/// A span can be halved only while it is at least 1024 units wide.
/// Starting from `MAX_T_VALUE`, the wider half reaches 1024 after 20 splits.
pub(crate) const MAX_SUBDIVISION_DEPTH: u32 = 21;

// can't use tangents, since we need [0..1..................2] to be seen
// as definitely not a line (it is when drawn, but not parametrically)
// so we compare midpoints
pub(crate) const CHEAP_DIST_LIMIT: f32 = 0.5; // just made this value up

/// Returns the subdivision tolerance for the resolution scale.
///
/// A scale that is not finite or not positive is treated as 1.
pub(crate) fn tolerance(res_scale: f32) -> f32 {
    let res_scale = if res_scale.is_finite() && res_scale > 0.0 {
        res_scale
    } else {
        1.0
    };

    CHEAP_DIST_LIMIT * res_scale.invert()
}

pub(crate) fn t_span_big_enough(t_span: u32) -> bool {
    debug_assert!(t_span <= MAX_T_VALUE);
    (t_span >> 10) != 0
}

pub(crate) fn t_value_to_scalar(t: u32) -> f32 {
    debug_assert!(t <= MAX_T_VALUE);
    // 1/kMaxTValue can't be represented as a float, but it's close and the limits work fine.
    const MAX_T_RECIPROCAL: f32 = 1.0 / MAX_T_VALUE as f32;
    t as f32 * MAX_T_RECIPROCAL
}

pub(crate) fn quad_too_curvy(p0: Point, p1: Point, p2: Point, tolerance: f32) -> bool {
    // diff = (a/4 + b/2 + c/4) - (a/2 + c/2)
    // diff = -a/4 + b/2 - c/4
    let dx = (p1.x).half() - (p0.x + p2.x).half().half();
    let dy = (p1.y).half() - (p0.y + p2.y).half().half();

    let dist = f32x2::new(dx, dy).abs().max_component();
    dist > tolerance
}

pub(crate) fn cubic_too_curvy(p0: Point, p1: Point, p2: Point, p3: Point, tolerance: f32) -> bool {
    let n0 = cheap_dist_exceeds_limit(
        p1,
        interp_safe(p0.x, p3.x, 1.0 / 3.0),
        interp_safe(p0.y, p3.y, 1.0 / 3.0),
        tolerance,
    );

    let n1 = cheap_dist_exceeds_limit(
        p2,
        interp_safe(p0.x, p3.x, 2.0 / 3.0),
        interp_safe(p0.y, p3.y, 2.0 / 3.0),
        tolerance,
    );

    n0 || n1
}

/// Checks a conic using its real, already evaluated, middle point.
pub(crate) fn conic_too_curvy(first: Point, mid: Point, last: Point, tolerance: f32) -> bool {
    cheap_dist_exceeds_limit(mid, first.x.ave(last.x), first.y.ave(last.y), tolerance)
}

fn cheap_dist_exceeds_limit(pt: Point, x: f32, y: f32, tolerance: f32) -> bool {
    let dist = (f32x2::new(x, y) - pt.to_f32x2()).abs().max_component();
    // just made up the 1/2
    dist > tolerance
}

fn interp_safe(a: f32, b: f32, t: f32) -> f32 {
    debug_assert!(t >= 0.0 && t <= 1.0);
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_from_scale() {
        assert_eq!(tolerance(1.0), 0.5);
        assert_eq!(tolerance(2.0), 0.25);
        assert_eq!(tolerance(0.0), 0.5);
        assert_eq!(tolerance(-3.0), 0.5);
        assert_eq!(tolerance(f32::NAN), 0.5);
        assert_eq!(tolerance(f32::INFINITY), 0.5);
    }

    #[test]
    fn t_span_halving_stops() {
        // Always follow the wider half.
        let mut span = MAX_T_VALUE;
        let mut depth = 0;
        while t_span_big_enough(span) {
            span -= span >> 1;
            depth += 1;
        }

        assert_eq!(depth, MAX_SUBDIVISION_DEPTH);
        assert!(!t_span_big_enough(1023));
    }

    #[test]
    fn t_value_limits() {
        assert_eq!(t_value_to_scalar(0), 0.0);
        assert_eq!(t_value_to_scalar(MAX_T_VALUE), 1.0);
        assert_eq!(t_value_to_scalar(MAX_T_VALUE >> 1), 0.5);
    }

    #[test]
    fn flat_curves() {
        let p0 = Point::from_xy(0.0, 0.0);
        let p3 = Point::from_xy(30.0, 0.0);

        assert!(!quad_too_curvy(p0, Point::from_xy(15.0, 0.0), p3, 0.5));
        assert!(!cubic_too_curvy(
            p0,
            Point::from_xy(10.0, 0.0),
            Point::from_xy(20.0, 0.0),
            p3,
            0.5
        ));
        assert!(!conic_too_curvy(p0, Point::from_xy(15.0, 0.4), p3, 0.5));
    }

    #[test]
    fn curvy_curves() {
        let p0 = Point::from_xy(0.0, 0.0);
        let p3 = Point::from_xy(30.0, 0.0);

        // The deviation is a half of the control point offset.
        assert!(!quad_too_curvy(p0, Point::from_xy(15.0, 0.8), p3, 0.5));
        assert!(quad_too_curvy(p0, Point::from_xy(15.0, 1.2), p3, 0.5));
        assert!(!quad_too_curvy(p0, Point::from_xy(15.0, 1.2), p3, 1.0));

        assert!(cubic_too_curvy(
            p0,
            Point::from_xy(10.0, 0.0),
            Point::from_xy(20.0, -0.6),
            p3,
            0.5
        ));

        assert!(conic_too_curvy(p0, Point::from_xy(15.0, 0.6), p3, 0.5));
        assert!(!conic_too_curvy(p0, Point::from_xy(15.0, 0.6), p3, 0.75));
    }
}
