// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::scalar::Scalar;

pub use strict_num::{FiniteF32, NonZeroPositiveF32, NormalizedF32};

/// An immutable `f32` in the `(0, 1)` range.
///
/// Used for curve splitting, where splitting at 0 or 1 produces an empty curve.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default, Debug)]
#[repr(transparent)]
pub struct NormalizedF32Exclusive(FiniteF32);

impl NormalizedF32Exclusive {
    /// A curve middle.
    pub const HALF: Self = NormalizedF32Exclusive(unsafe { FiniteF32::new_unchecked(0.5) });

    /// Creates a `NormalizedF32Exclusive`.
    ///
    /// Returns `None` for 0, 1, values outside of the range and NaN.
    pub fn new(n: f32) -> Option<Self> {
        if n > 0.0 && n < 1.0 {
            // `n` is guarantee to be finite after the bounds check.
            FiniteF32::new(n).map(NormalizedF32Exclusive)
        } else {
            None
        }
    }

    /// Creates a `NormalizedF32Exclusive` pinning the given value
    /// to `[EPSILON, 1 - EPSILON]`.
    ///
    /// NaN and positive infinity are pinned to the upper bound.
    pub fn new_bounded(n: f32) -> Self {
        let n = n.bound(f32::EPSILON, 1.0 - f32::EPSILON);
        // `n` is guarantee to be finite after pinning.
        debug_assert!(n.is_finite());
        NormalizedF32Exclusive(unsafe { FiniteF32::new_unchecked(n) })
    }

    /// Returns the value as a primitive type.
    pub fn get(self) -> f32 {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_bounds() {
        assert_eq!(NormalizedF32Exclusive::new(0.0), None);
        assert_eq!(NormalizedF32Exclusive::new(1.0), None);
        assert_eq!(NormalizedF32Exclusive::new(-0.5), None);
        assert_eq!(NormalizedF32Exclusive::new(f32::NAN), None);
        assert_eq!(NormalizedF32Exclusive::new(0.25).map(|n| n.get()), Some(0.25));
    }

    #[test]
    fn bounded() {
        assert_eq!(NormalizedF32Exclusive::new_bounded(0.0).get(), f32::EPSILON);
        assert_eq!(NormalizedF32Exclusive::new_bounded(1.0).get(), 1.0 - f32::EPSILON);
        assert_eq!(NormalizedF32Exclusive::new_bounded(f32::NAN).get(), 1.0 - f32::EPSILON);
        assert_eq!(NormalizedF32Exclusive::new_bounded(0.5), NormalizedF32Exclusive::HALF);
    }
}
