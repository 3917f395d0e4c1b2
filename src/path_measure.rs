// Copyright 2014 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use contour_measure_path::{Path, PathBuilder, Point, Transform};

use crate::contour_measure::{ContourMeasure, MatrixFlags};
use crate::iter::ContourMeasureIter;

/// A path measure that walks contours one at a time.
///
/// A stateful wrapper over [`ContourMeasureIter`] that keeps the current contour.
/// All queries are forwarded to the current contour and fail when there is none.
#[allow(missing_debug_implementations)]
#[derive(Clone, Default)]
pub struct PathMeasure<'a> {
    iter: Option<ContourMeasureIter<'a>>,
    contour: Option<ContourMeasure>,
}

impl<'a> PathMeasure<'a> {
    /// Creates a new measure positioned at the first contour of the path.
    pub fn new(path: &'a Path, force_closed: bool, res_scale: f32) -> Self {
        let mut measure = PathMeasure::default();
        measure.set_path(path, force_closed, res_scale);
        measure
    }

    /// Resets the measure to the first contour of a new path.
    pub fn set_path(&mut self, path: &'a Path, force_closed: bool, res_scale: f32) {
        let mut iter = ContourMeasureIter::new(path, force_closed, res_scale);
        self.contour = iter.next();
        self.iter = Some(iter);
    }

    /// Moves to the next contour.
    ///
    /// Returns `false` when there are no more contours.
    pub fn next_contour(&mut self) -> bool {
        self.contour = self.iter.as_mut().and_then(|iter| iter.next());
        self.contour.is_some()
    }

    /// Returns the current contour, if any.
    pub fn current_measure(&self) -> Option<&ContourMeasure> {
        self.contour.as_ref()
    }

    /// Returns the length of the current contour or zero.
    pub fn length(&self) -> f32 {
        self.contour.as_ref().map(|c| c.length()).unwrap_or(0.0)
    }

    /// Checks that the current contour is closed.
    pub fn is_closed(&self) -> bool {
        self.contour.as_ref().map(|c| c.is_closed()).unwrap_or(false)
    }

    /// See [`ContourMeasure::pos_tan`].
    pub fn pos_tan(&self, distance: f32) -> Option<(Point, Point)> {
        self.contour.as_ref()?.pos_tan(distance)
    }

    /// See [`ContourMeasure::matrix`].
    pub fn matrix(&self, distance: f32, flags: MatrixFlags) -> Option<Transform> {
        self.contour.as_ref()?.matrix(distance, flags)
    }

    /// See [`ContourMeasure::segment`].
    pub fn segment(&self, start_d: f32, stop_d: f32, start_with_move_to: bool) -> Option<Path> {
        self.contour
            .as_ref()?
            .segment(start_d, stop_d, start_with_move_to)
    }

    /// See [`ContourMeasure::push_segment`].
    pub fn push_segment(
        &self,
        start_d: f32,
        stop_d: f32,
        start_with_move_to: bool,
        pb: &mut PathBuilder,
    ) -> Option<()> {
        self.contour
            .as_ref()?
            .push_segment(start_d, stop_d, start_with_move_to, pb)
    }
}
