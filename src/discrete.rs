// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// This module is a port of SkDiscretePathEffect.

use contour_measure_path::{FiniteF32, Path, PathBuilder, Point, SCALAR_NEARLY_ZERO};

use crate::iter::ContourMeasureIter;

// Limits the number of points per contour for tiny segment lengths.
const MAX_REASONABLE_ITERATIONS: usize = 100000;

/// A path effect that breaks contours into segments and randomly moves
/// the segment ends away from the contour.
///
/// # Guarantees
///
/// - The segment length is finite and not nearly zero.
/// - The deviation is finite.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct DiscreteEffect {
    segment_length: f32,
    deviation: f32,
    seed_assist: u32,
}

impl DiscreteEffect {
    /// Creates a new effect.
    ///
    /// `seed_assist` alters the pseudo-random sequence, so the same path
    /// can be jittered differently.
    pub fn new(segment_length: f32, deviation: f32, seed_assist: u32) -> Option<Self> {
        let segment_length = FiniteF32::new(segment_length)?.get();
        let deviation = FiniteF32::new(deviation)?.get();
        if segment_length <= SCALAR_NEARLY_ZERO {
            return None;
        }

        Some(DiscreteEffect {
            segment_length,
            deviation,
            seed_assist,
        })
    }

    /// Jitters every contour of `path`.
    ///
    /// When `is_fill` is set, contours are treated as closed.
    /// Contours too short to be split are copied as is.
    ///
    /// `res_scale` controls the contours flattening precision.
    ///
    /// Returns `None` when nothing was produced.
    pub fn apply(&self, path: &Path, is_fill: bool, res_scale: f32) -> Option<Path> {
        let mut contours = ContourMeasureIter::new(path, is_fill, res_scale).peekable();

        // The sequence depends on the first contour, so the same path is always jittered the same.
        let first_length = contours.peek().map(|c| c.length()).unwrap_or(0.0);
        let seed = self.seed_assist ^ round_to_u32(first_length);
        let mut rand = LcgRandom::new(seed ^ seed.rotate_left(16));

        let min_length = self.segment_length * if is_fill { 3.0 } else { 2.0 };

        let mut pb = PathBuilder::new();
        for contour in contours {
            let length = contour.length();
            if min_length > length {
                contour.push_segment(0.0, length, true, &mut pb);
                continue;
            }

            let mut n = round_to_u32(length / self.segment_length) as usize;
            if n > MAX_REASONABLE_ITERATIONS {
                tracing::warn!(
                    length,
                    segment_length = self.segment_length,
                    limit = MAX_REASONABLE_ITERATIONS,
                    "too many discrete segments, clamped"
                );
                n = MAX_REASONABLE_ITERATIONS;
            }

            let delta = length / n as f32;
            let mut distance = 0.0;
            if contour.is_closed() {
                n -= 1;
                distance += delta * 0.5;
            }

            if let Some((pos, tangent)) = contour.pos_tan(distance) {
                let p = perturb(pos, tangent, rand.next_signed_unit() * self.deviation);
                pb.move_to(p.x, p.y);
            }

            for _ in 0..n {
                distance += delta;
                if let Some((pos, tangent)) = contour.pos_tan(distance) {
                    let p = perturb(pos, tangent, rand.next_signed_unit() * self.deviation);
                    pb.line_to(p.x, p.y);
                }
            }

            if contour.is_closed() {
                pb.close();
            }
        }

        pb.finish()
    }
}

// Moves the point along the contour normal.
fn perturb(p: Point, tangent: Point, scale: f32) -> Point {
    Point::from_xy(p.x + tangent.y * scale, p.y - tangent.x * scale)
}

// Lengths are never negative, so truncation rounds correctly.
fn round_to_u32(n: f32) -> u32 {
    debug_assert!(!(n < 0.0));
    (n + 0.5) as u32
}

// A linear congruential generator, so the jitter doesn't depend on a platform RNG.
#[derive(Copy, Clone, Debug)]
struct LcgRandom {
    seed: u32,
}

impl LcgRandom {
    fn new(seed: u32) -> Self {
        LcgRandom { seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        self.seed
    }

    // In -1..1, with 16 bits of precision.
    fn next_signed_unit(&mut self) -> f32 {
        ((self.next_u32() as i32) >> 15) as f32 / 65536.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour_measure_path::PathVerb;

    fn line(length: f32) -> Path {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.line_to(length, 0.0);
        pb.finish().unwrap()
    }

    #[test]
    fn validation() {
        assert!(DiscreteEffect::new(0.0, 1.0, 0).is_none());
        assert!(DiscreteEffect::new(-1.0, 1.0, 0).is_none());
        assert!(DiscreteEffect::new(0.0001, 1.0, 0).is_none());
        assert!(DiscreteEffect::new(f32::NAN, 1.0, 0).is_none());
        assert!(DiscreteEffect::new(f32::INFINITY, 1.0, 0).is_none());
        assert!(DiscreteEffect::new(1.0, f32::NAN, 0).is_none());
        assert!(DiscreteEffect::new(1.0, 0.0, 0).is_some());
        assert!(DiscreteEffect::new(1.0, -2.0, 7).is_some());
    }

    #[test]
    fn random_range() {
        let mut rand = LcgRandom::new(0);
        let mut has_negative = false;
        let mut has_positive = false;
        for _ in 0..1000 {
            let n = rand.next_signed_unit();
            assert!(n >= -1.0 && n < 1.0, "{}", n);
            has_negative |= n < 0.0;
            has_positive |= n > 0.0;
        }

        assert!(has_negative && has_positive);
    }

    #[test]
    fn random_is_deterministic() {
        let mut a = LcgRandom::new(42);
        let mut b = LcgRandom::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_u32(0.0), 0);
        assert_eq!(round_to_u32(2.49), 2);
        assert_eq!(round_to_u32(2.5), 3);
        assert_eq!(round_to_u32(1.0e20), u32::MAX);
    }

    #[test]
    fn no_deviation_keeps_points_on_contour() {
        let effect = DiscreteEffect::new(16.0, 0.0, 0).unwrap();
        let path = effect.apply(&line(128.0), false, 1.0).unwrap();

        assert_eq!(path.points().len(), 9);
        for (i, p) in path.points().iter().enumerate() {
            assert_eq!(*p, Point::from_xy(16.0 * i as f32, 0.0));
        }
    }

    #[test]
    fn short_contour_is_copied() {
        let effect = DiscreteEffect::new(16.0, 4.0, 0).unwrap();
        let path = effect.apply(&line(20.0), false, 1.0).unwrap();

        assert_eq!(path.verbs(), &[PathVerb::Move, PathVerb::Line]);
        assert_eq!(
            path.points(),
            &[Point::from_xy(0.0, 0.0), Point::from_xy(20.0, 0.0)]
        );
    }

    #[test]
    fn perturb_along_normal() {
        let p = perturb(Point::from_xy(1.0, 1.0), Point::from_xy(1.0, 0.0), 2.0);
        assert_eq!(p, Point::from_xy(1.0, -1.0));

        let p = perturb(Point::from_xy(1.0, 1.0), Point::from_xy(0.0, 1.0), 2.0);
        assert_eq!(p, Point::from_xy(3.0, 1.0));
    }
}
