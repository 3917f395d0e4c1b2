// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
`contour-measure` is a [Skia](https://skia.org/) `SkContourMeasure` port to Rust.

Measures the arc length of path contours and allows sampling positions and tangents
at any distance along them, extracting sub-paths by distance range,
dashing and jittering paths, and stamping a path along other paths.

```
use contour_measure::{ContourMeasureIter, PathBuilder};

let path = PathBuilder::from_circle(0.0, 0.0, 100.0).unwrap();
let contour = ContourMeasureIter::new(&path, false, 1.0).next().unwrap();
assert!((contour.length() - 628.3).abs() < 6.3);
```
*/

#![no_std]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::float_cmp)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

#[cfg(not(any(feature = "std", feature = "no-std-float")))]
compile_error!("You have to activate either the `std` or the `no-std-float` feature.");

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod builder;
mod contour_measure;
mod curve;
mod curviness;
mod dash;
mod discrete;
mod iter;
mod path_1d;
mod path_measure;

pub use contour_measure_path::{
    path_geometry, FiniteF32, NonZeroPositiveF32, NormalizedF32, NormalizedF32Exclusive, Path,
    PathBuilder, PathSegment, PathSegmentsIter, PathVerb, Point, Rect, Transform,
};

pub use contour_measure::{ContourMeasure, MatrixFlags};
pub use curve::Curve;
pub use dash::StrokeDash;
pub use discrete::DiscreteEffect;
pub use iter::ContourMeasureIter;
pub use path_1d::{Path1DEffect, StampStyle};
pub use path_measure::PathMeasure;
