// Copyright 2014 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use contour_measure_path::{Path, PathSegmentsIter};

use crate::builder;
use crate::contour_measure::ContourMeasure;
use crate::curviness;

/// An iterator over measured path contours.
///
/// Contours without length, like the ones made only from MoveTo,
/// are skipped.
///
/// The path is borrowed for the whole iteration, while produced
/// contour measures own their data and can outlive the path.
#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct ContourMeasureIter<'a> {
    iter: PathSegmentsIter<'a>,
    force_closed: bool,
    tolerance: f32,
}

impl<'a> ContourMeasureIter<'a> {
    /// Creates a new iterator.
    ///
    /// When `force_closed` is set, every contour is treated as closed.
    ///
    /// `res_scale` controls the flattening precision. Larger values produce
    /// more precise results. A non-finite or non-positive value is treated as 1.
    pub fn new(path: &'a Path, force_closed: bool, res_scale: f32) -> Self {
        ContourMeasureIter {
            iter: path.segments(),
            force_closed,
            tolerance: curviness::tolerance(res_scale),
        }
    }

    /// Restarts the iteration with a new path.
    pub fn reset(&mut self, path: &'a Path, force_closed: bool, res_scale: f32) {
        *self = ContourMeasureIter::new(path, force_closed, res_scale);
    }
}

impl Iterator for ContourMeasureIter<'_> {
    type Item = ContourMeasure;

    fn next(&mut self) -> Option<Self::Item> {
        while self.iter.next_verb().is_some() {
            if let Some(contour) =
                builder::build_contour(&mut self.iter, self.force_closed, self.tolerance)
            {
                return Some(contour);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use contour_measure_path::PathBuilder;

    #[test]
    fn skips_empty_contours() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.line_to(0.0, 0.0);
        pb.move_to(1.0, 1.0);
        pb.line_to(4.0, 5.0);
        pb.move_to(9.0, 9.0);
        pb.close();
        pb.move_to(2.0, 2.0);
        pb.line_to(2.0, 3.0);
        let path = pb.finish().unwrap();

        let lengths: Vec<f32> = ContourMeasureIter::new(&path, false, 1.0)
            .map(|c| c.length())
            .collect();
        assert_eq!(lengths, &[5.0, 1.0]);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let path = PathBuilder::from_circle(0.0, 0.0, 5.0).unwrap();

        let mut iter = ContourMeasureIter::new(&path, false, 1.0);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn reset() {
        let circle = PathBuilder::from_circle(0.0, 0.0, 5.0).unwrap();

        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.line_to(3.0, 4.0);
        let line = pb.finish().unwrap();

        let mut iter = ContourMeasureIter::new(&circle, false, 1.0);
        assert!(iter.next().unwrap().is_closed());

        iter.reset(&line, true, 1.0);
        let contour = iter.next().unwrap();
        assert!(contour.is_closed());
        assert_eq!(contour.length(), 10.0);
        assert!(iter.next().is_none());
    }
}
