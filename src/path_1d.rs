// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// This module is a port of SkPath1DPathEffect.

use arrayvec::ArrayVec;

use contour_measure_path::{FiniteF32, Path, PathBuilder, PathSegment, Point, Scalar, Transform};

use crate::contour_measure::MatrixFlags;
use crate::path_measure::PathMeasure;

// Stamping a very long contour with a tiny advance would produce an enormous path.
const MAX_REASONABLE_ITERATIONS: usize = 100000;

/// How a stamp is placed along a contour.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StampStyle {
    /// Translate the stamp to each position.
    Translate,
    /// Rotate the stamp along the tangent and translate it to each position.
    Rotate,
    /// Bend every stamp point along the contour.
    Morph,
}

/// A path effect that repeats a path along contours.
///
/// # Guarantees
///
/// - The advance is positive and finite.
/// - The initial offset is in `0..advance`.
#[derive(Clone, PartialEq, Debug)]
pub struct Path1DEffect {
    stamp: Path,
    advance: f32,
    initial_offset: f32,
    style: StampStyle,
}

impl Path1DEffect {
    /// Creates a new effect.
    ///
    /// `advance` is the distance between stamps and `phase` shifts the first one.
    /// Both must be finite and `advance` must be positive.
    pub fn new(stamp: Path, advance: f32, phase: f32, style: StampStyle) -> Option<Self> {
        let advance = FiniteF32::new(advance)?.get();
        let phase = FiniteF32::new(phase)?.get();
        if !(advance > 0.0) {
            return None;
        }

        Some(Path1DEffect {
            stamp,
            advance,
            initial_offset: phase_to_offset(phase, advance),
            style,
        })
    }

    /// Returns the distance of the first stamp from a contour start.
    pub fn initial_offset(&self) -> f32 {
        self.initial_offset
    }

    /// Stamps the path along every contour of `path`.
    ///
    /// `res_scale` controls the contours flattening precision.
    ///
    /// Returns `None` when nothing was produced or a contour
    /// would take too many stamps.
    pub fn apply(&self, path: &Path, res_scale: f32) -> Option<Path> {
        let mut pb = PathBuilder::new();
        let mut measure = PathMeasure::new(path, false, res_scale);
        loop {
            let length = measure.length();
            let mut distance = self.initial_offset;
            let mut governor = MAX_REASONABLE_ITERATIONS;
            while distance < length {
                if governor == 0 {
                    tracing::warn!(
                        length,
                        advance = self.advance,
                        limit = MAX_REASONABLE_ITERATIONS,
                        "too many stamps, path effect skipped"
                    );
                    return None;
                }

                governor -= 1;
                self.stamp_at(distance, &measure, &mut pb);
                distance += self.advance;
            }

            if !measure.next_contour() {
                break;
            }
        }

        pb.finish()
    }

    fn stamp_at(&self, distance: f32, measure: &PathMeasure, pb: &mut PathBuilder) {
        match self.style {
            StampStyle::Translate => {
                if let Some((pos, _)) = measure.pos_tan(distance) {
                    let ts = Transform::from_translate(pos.x, pos.y);
                    if let Some(stamp) = self.stamp.clone().transform(ts) {
                        pb.push_path(&stamp);
                    }
                }
            }
            StampStyle::Rotate => {
                if let Some(ts) = measure.matrix(distance, MatrixFlags::PositionAndTangent) {
                    if let Some(stamp) = self.stamp.clone().transform(ts) {
                        pb.push_path(&stamp);
                    }
                }
            }
            StampStyle::Morph => morph_path(&self.stamp, distance, measure, pb),
        }
    }
}

// Cleanup the phase parameter, inverting it so that it becomes an
// offset along the path (to match the interpretation in PostScript).
fn phase_to_offset(mut phase: f32, advance: f32) -> f32 {
    if phase < 0.0 {
        phase = -phase;
        if phase > advance {
            phase %= advance;
        }
    } else {
        if phase > advance {
            phase %= advance;
        }

        phase = advance - phase;
    }

    // now catch the edge case where phase == advance (within epsilon)
    if phase >= advance {
        phase = 0.0;
    }

    debug_assert!(phase >= 0.0);
    phase
}

fn morph_path(stamp: &Path, distance: f32, measure: &PathMeasure, pb: &mut PathBuilder) {
    let mut prev = Point::zero();
    let mut last_move_to = Point::zero();
    for seg in stamp.segments() {
        match seg {
            PathSegment::MoveTo(p) => {
                if let Some(pts) = morph_points(&[p], distance, measure) {
                    pb.move_to(pts[0].x, pts[0].y);
                }

                prev = p;
                last_move_to = p;
            }
            PathSegment::LineTo(p) => {
                // Lines are bent, so they become quads.
                let mid = Point::from_xy(prev.x.ave(p.x), prev.y.ave(p.y));
                if let Some(pts) = morph_points(&[mid, p], distance, measure) {
                    pb.quad_to_pt(pts[0], pts[1]);
                }

                prev = p;
            }
            PathSegment::QuadTo(p1, p) => {
                if let Some(pts) = morph_points(&[p1, p], distance, measure) {
                    pb.quad_to_pt(pts[0], pts[1]);
                }

                prev = p;
            }
            PathSegment::ConicTo(p1, p, weight) => {
                if let Some(pts) = morph_points(&[p1, p], distance, measure) {
                    pb.conic_points_to(pts[0], pts[1], weight);
                }

                prev = p;
            }
            PathSegment::CubicTo(p1, p2, p) => {
                if let Some(pts) = morph_points(&[p1, p2, p], distance, measure) {
                    pb.cubic_to_pt(pts[0], pts[1], pts[2]);
                }

                prev = p;
            }
            PathSegment::Close => {
                pb.close();
                prev = last_move_to;
            }
        }
    }
}

// Each point is moved along the contour by its x and away from it by its y.
fn morph_points(
    src: &[Point],
    distance: f32,
    measure: &PathMeasure,
) -> Option<ArrayVec<Point, 3>> {
    let mut dst = ArrayVec::new();
    for p in src {
        let (pos, tangent) = measure.pos_tan(distance + p.x)?;
        dst.push(Point::from_xy(
            pos.x - tangent.y * p.y,
            pos.y + tangent.x * p.y,
        ));
    }

    Some(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> Path {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.line_to(1.0, 0.0);
        pb.finish().unwrap()
    }

    #[test]
    fn validation() {
        assert!(Path1DEffect::new(stamp(), 0.0, 0.0, StampStyle::Translate).is_none());
        assert!(Path1DEffect::new(stamp(), -1.0, 0.0, StampStyle::Translate).is_none());
        assert!(Path1DEffect::new(stamp(), f32::NAN, 0.0, StampStyle::Translate).is_none());
        assert!(Path1DEffect::new(stamp(), f32::INFINITY, 0.0, StampStyle::Translate).is_none());
        assert!(Path1DEffect::new(stamp(), 1.0, f32::NAN, StampStyle::Translate).is_none());
        assert!(Path1DEffect::new(stamp(), 1.0, 0.0, StampStyle::Translate).is_some());
    }

    #[test]
    fn phase_normalization() {
        assert_eq!(phase_to_offset(0.0, 10.0), 0.0);
        assert_eq!(phase_to_offset(3.0, 10.0), 7.0);
        assert_eq!(phase_to_offset(13.0, 10.0), 7.0);
        assert_eq!(phase_to_offset(10.0, 10.0), 0.0);
        assert_eq!(phase_to_offset(-3.0, 10.0), 3.0);
        assert_eq!(phase_to_offset(-13.0, 10.0), 3.0);
        assert_eq!(phase_to_offset(-10.0, 10.0), 0.0);
    }

    #[test]
    fn morph_points_follow_the_contour() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.line_to(8.0, 0.0);
        pb.line_to(8.0, 8.0);
        let path = pb.finish().unwrap();
        let measure = PathMeasure::new(&path, false, 1.0);

        let pts = morph_points(
            &[Point::from_xy(2.0, 1.0), Point::from_xy(12.0, 1.0)],
            0.0,
            &measure,
        )
        .unwrap();
        assert_eq!(pts[0], Point::from_xy(2.0, 1.0));
        assert_eq!(pts[1], Point::from_xy(7.0, 4.0));

        // Points past the end are pinned, but NaN is not measurable.
        assert!(morph_points(&[Point::from_xy(f32::NAN, 0.0)], 0.0, &measure).is_none());
    }
}
