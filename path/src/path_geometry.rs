// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! A collection of functions to work with Bezier paths.
//!
//! Mainly for internal use. Do not rely on it!

#![allow(missing_docs)]

use crate::{f32x2, NormalizedF32, NormalizedF32Exclusive, Point};

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use crate::NoStdFloat;

#[derive(Copy, Clone, Default, Debug)]
pub struct QuadCoeff {
    pub a: f32x2,
    pub b: f32x2,
    pub c: f32x2,
}

impl QuadCoeff {
    pub fn from_points(points: &[Point; 3]) -> Self {
        QuadCoeff::from_f32x2(
            points[0].to_f32x2(),
            points[1].to_f32x2(),
            points[2].to_f32x2(),
        )
    }

    fn from_f32x2(p0: f32x2, p1: f32x2, p2: f32x2) -> Self {
        let b = p1 - p0;
        let a = p2 - p1 - b;
        QuadCoeff { a, b: times_2(b), c: p0 }
    }

    pub fn eval(&self, t: f32x2) -> f32x2 {
        (self.a * t + self.b) * t + self.c
    }
}

#[derive(Copy, Clone, Default, Debug)]
pub struct CubicCoeff {
    pub a: f32x2,
    pub b: f32x2,
    pub c: f32x2,
    pub d: f32x2,
}

impl CubicCoeff {
    pub fn from_points(points: &[Point; 4]) -> Self {
        let p0 = points[0].to_f32x2();
        let p1 = points[1].to_f32x2();
        let p2 = points[2].to_f32x2();
        let p3 = points[3].to_f32x2();
        let three = f32x2::splat(3.0);

        CubicCoeff {
            a: p3 + three * (p1 - p2) - p0,
            b: three * (p2 - times_2(p1) + p0),
            c: three * (p1 - p0),
            d: p0,
        }
    }

    pub fn eval(&self, t: f32x2) -> f32x2 {
        ((self.a * t + self.b) * t + self.c) * t + self.d
    }
}

pub fn eval_quad_at(src: &[Point; 3], t: NormalizedF32) -> Point {
    Point::from_f32x2(QuadCoeff::from_points(src).eval(f32x2::splat(t.get())))
}

pub fn eval_quad_tangent_at(src: &[Point; 3], tol: NormalizedF32) -> Point {
    // The derivative equation is 2(b - a +(a - 2b +c)t). This returns a
    // zero tangent vector when t is 0 or 1, and the control point is equal
    // to the end point. In this case, use the quad end points to compute the tangent.
    if (tol == NormalizedF32::ZERO && src[0] == src[1])
        || (tol == NormalizedF32::ONE && src[1] == src[2])
    {
        return src[2] - src[0];
    }

    let p0 = src[0].to_f32x2();
    let p1 = src[1].to_f32x2();
    let p2 = src[2].to_f32x2();

    let b = p1 - p0;
    let a = p2 - p1 - b;
    let t = a * f32x2::splat(tol.get()) + b;

    Point::from_f32x2(t + t)
}

pub fn eval_cubic_pos_at(src: &[Point; 4], t: NormalizedF32) -> Point {
    Point::from_f32x2(CubicCoeff::from_points(src).eval(f32x2::splat(t.get())))
}

pub fn eval_cubic_tangent_at(src: &[Point; 4], t: NormalizedF32) -> Point {
    // The derivative equation returns a zero tangent vector when t is 0 or 1, and the
    // adjacent control point is equal to the end point. In this case, use the
    // next control point or the end points to compute the tangent.
    if (t.get() == 0.0 && src[0] == src[1]) || (t.get() == 1.0 && src[2] == src[3]) {
        let mut tangent = if t.get() == 0.0 {
            src[2] - src[0]
        } else {
            src[3] - src[1]
        };

        if tangent.x == 0.0 && tangent.y == 0.0 {
            tangent = src[3] - src[0];
        }

        tangent
    } else {
        eval_cubic_derivative(src, t)
    }
}

fn eval_cubic_derivative(src: &[Point; 4], t: NormalizedF32) -> Point {
    let p0 = src[0].to_f32x2();
    let p1 = src[1].to_f32x2();
    let p2 = src[2].to_f32x2();
    let p3 = src[3].to_f32x2();

    let coeff = QuadCoeff {
        a: p3 + f32x2::splat(3.0) * (p1 - p2) - p0,
        b: times_2(p2 - times_2(p1) + p0),
        c: p1 - p0,
    };

    Point::from_f32x2(coeff.eval(f32x2::splat(t.get())))
}

pub fn chop_quad_at(src: &[Point], t: NormalizedF32Exclusive, dst: &mut [Point; 5]) {
    let p0 = src[0].to_f32x2();
    let p1 = src[1].to_f32x2();
    let p2 = src[2].to_f32x2();
    let tt = f32x2::splat(t.get());

    let p01 = interp(p0, p1, tt);
    let p12 = interp(p1, p2, tt);

    dst[0] = Point::from_f32x2(p0);
    dst[1] = Point::from_f32x2(p01);
    dst[2] = Point::from_f32x2(interp(p01, p12, tt));
    dst[3] = Point::from_f32x2(p12);
    dst[4] = Point::from_f32x2(p2);
}

pub fn chop_cubic_at2(src: &[Point; 4], t: NormalizedF32Exclusive, dst: &mut [Point]) {
    let p0 = src[0].to_f32x2();
    let p1 = src[1].to_f32x2();
    let p2 = src[2].to_f32x2();
    let p3 = src[3].to_f32x2();
    let tt = f32x2::splat(t.get());

    let ab = interp(p0, p1, tt);
    let bc = interp(p1, p2, tt);
    let cd = interp(p2, p3, tt);
    let abc = interp(ab, bc, tt);
    let bcd = interp(bc, cd, tt);
    let abcd = interp(abc, bcd, tt);

    dst[0] = Point::from_f32x2(p0);
    dst[1] = Point::from_f32x2(ab);
    dst[2] = Point::from_f32x2(abc);
    dst[3] = Point::from_f32x2(abcd);
    dst[4] = Point::from_f32x2(bcd);
    dst[5] = Point::from_f32x2(cd);
    dst[6] = Point::from_f32x2(p3);
}

/// A rational quadratic Bezier curve.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Conic {
    pub points: [Point; 3],
    pub weight: f32,
}

impl Conic {
    pub fn new(pt0: Point, pt1: Point, pt2: Point, weight: f32) -> Self {
        Conic {
            points: [pt0, pt1, pt2],
            weight,
        }
    }

    pub fn from_points(points: &[Point], weight: f32) -> Self {
        Conic {
            points: [points[0], points[1], points[2]],
            weight,
        }
    }

    fn coeff(&self) -> (QuadCoeff, QuadCoeff) {
        let p0 = self.points[0].to_f32x2();
        let p1 = self.points[1].to_f32x2();
        let p2 = self.points[2].to_f32x2();
        let ww = f32x2::splat(self.weight);

        let numer = QuadCoeff::from_f32x2(p0, p1 * ww, p2);
        let denom = QuadCoeff::from_f32x2(f32x2::splat(1.0), ww, f32x2::splat(1.0));
        (numer, denom)
    }

    pub fn eval_at(&self, t: NormalizedF32) -> Point {
        let (numer, denom) = self.coeff();
        let tt = f32x2::splat(t.get());
        Point::from_f32x2(numer.eval(tt) / denom.eval(tt))
    }

    pub fn eval_tangent_at(&self, t: NormalizedF32) -> Point {
        let p0 = self.points[0];
        let p1 = self.points[1];
        let p2 = self.points[2];

        // The derivative equation returns a zero tangent vector when t is 0 or 1,
        // and the control point is equal to the end point.
        // In this case, use the conic endpoints to compute the tangent.
        if (t == NormalizedF32::ZERO && p0 == p1) || (t == NormalizedF32::ONE && p1 == p2) {
            return p2 - p0;
        }

        let p20 = p2.to_f32x2() - p0.to_f32x2();
        let p10 = p1.to_f32x2() - p0.to_f32x2();

        let c = f32x2::splat(self.weight) * p10;
        let a = f32x2::splat(self.weight) * p20 - p20;
        let b = p20 - c - c;
        let coeff = QuadCoeff { a, b, c };

        Point::from_f32x2(coeff.eval(f32x2::splat(t.get())))
    }

    /// Splits the conic at `t` into two conics.
    ///
    /// Returns `None` when the result is not finite.
    pub fn chop_at(&self, t: NormalizedF32Exclusive) -> Option<[Conic; 2]> {
        let tt = f32x2::splat(t.get());
        let tz = t.get();

        // Homogeneous coordinates: (x * w, y * w) and w.
        let xy = [
            self.points[0].to_f32x2(),
            self.points[1].to_f32x2() * f32x2::splat(self.weight),
            self.points[2].to_f32x2(),
        ];
        let z = [1.0, self.weight, 1.0];

        let ab_xy = interp(xy[0], xy[1], tt);
        let ab_z = interp_z(z[0], z[1], tz);
        let bc_xy = interp(xy[1], xy[2], tt);
        let bc_z = interp_z(z[1], z[2], tz);
        let abc_xy = interp(ab_xy, bc_xy, tt);
        let abc_z = interp_z(ab_z, bc_z, tz);

        let mid = project(abc_xy, abc_z);
        let root = abc_z.sqrt();

        let first = Conic::new(self.points[0], project(ab_xy, ab_z), mid, ab_z / root);
        let second = Conic::new(mid, project(bc_xy, bc_z), self.points[2], bc_z / root);

        if first.is_finite() && second.is_finite() {
            Some([first, second])
        } else {
            None
        }
    }

    /// Returns the part of the conic between `t1` and `t2`.
    pub fn chop_range(&self, t1: NormalizedF32, t2: NormalizedF32) -> Conic {
        if t1 == NormalizedF32::ZERO || t2 == NormalizedF32::ONE {
            if t1 == NormalizedF32::ZERO && t2 == NormalizedF32::ONE {
                return *self;
            }

            let (t, idx) = if t1 == NormalizedF32::ZERO {
                (t2, 0)
            } else {
                (t1, 1)
            };

            if let Some(pair) = NormalizedF32Exclusive::new(t.get()).and_then(|t| self.chop_at(t))
            {
                return pair[idx];
            }
        }

        let (numer, denom) = self.coeff();
        let tt1 = f32x2::splat(t1.get());
        let a_xy = numer.eval(tt1);
        let a_z = denom.eval(tt1);
        let mid = f32x2::splat((t1.get() + t2.get()) * 0.5);
        let d_xy = numer.eval(mid);
        let d_z = denom.eval(mid);
        let tt2 = f32x2::splat(t2.get());
        let c_xy = numer.eval(tt2);
        let c_z = denom.eval(tt2);

        // Control point fitting the curve through the middle point.
        let half = f32x2::splat(0.5);
        let b_xy = times_2(d_xy) - (a_xy + c_xy) * half;
        let b_z = times_2(d_z) - (a_z + c_z) * half;

        Conic {
            points: [
                Point::from_f32x2(a_xy / a_z),
                Point::from_f32x2(b_xy / b_z),
                Point::from_f32x2(c_xy / c_z),
            ],
            weight: b_z.x() / (a_z.x() * c_z.x()).sqrt(),
        }
    }

    fn is_finite(&self) -> bool {
        self.weight.is_finite() && self.points.iter().all(|p| p.is_finite())
    }
}

fn interp(v0: f32x2, v1: f32x2, t: f32x2) -> f32x2 {
    v0 + (v1 - v0) * t
}

fn interp_z(v0: f32, v1: f32, t: f32) -> f32 {
    v0 + (v1 - v0) * t
}

fn project(xy: f32x2, z: f32) -> Point {
    Point::from_f32x2(xy / f32x2::splat(z))
}

fn times_2(value: f32x2) -> f32x2 {
    value + value
}
