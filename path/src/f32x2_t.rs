// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use crate::NoStdFloat;

/// A pair of f32 numbers.
///
/// Used to evaluate both point coordinates at once.
///
/// Mainly for internal use. Do not rely on it!
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct f32x2(pub [f32; 2]);

impl f32x2 {
    /// Creates a new pair.
    pub fn new(a: f32, b: f32) -> f32x2 {
        f32x2([a, b])
    }

    /// Creates a new pair from a single value.
    pub fn splat(x: f32) -> f32x2 {
        f32x2([x, x])
    }

    /// Returns absolute values.
    pub fn abs(self) -> f32x2 {
        self.map(|n| n.abs())
    }

    /// Returns per-component minimums.
    ///
    /// NaN handling is unspecified.
    pub fn min(self, other: f32x2) -> f32x2 {
        self.zip(other, |a, b| if b < a { b } else { a })
    }

    /// Returns per-component maximums.
    ///
    /// NaN handling is unspecified.
    pub fn max(self, other: f32x2) -> f32x2 {
        self.zip(other, |a, b| if a < b { b } else { a })
    }

    /// Returns the largest component.
    pub fn max_component(self) -> f32 {
        self.max(f32x2::new(self.y(), self.x())).x()
    }

    /// Returns the first value.
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    /// Returns the second value.
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    fn map(self, f: impl Fn(f32) -> f32) -> f32x2 {
        f32x2([f(self.x()), f(self.y())])
    }

    fn zip(self, other: f32x2, f: impl Fn(f32, f32) -> f32) -> f32x2 {
        f32x2([f(self.x(), other.x()), f(self.y(), other.y())])
    }
}

macro_rules! impl_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl core::ops::$trait<f32x2> for f32x2 {
            type Output = f32x2;

            fn $method(self, other: f32x2) -> f32x2 {
                self.zip(other, |a, b| a $op b)
            }
        }
    };
}

impl_op!(Add, add, +);
impl_op!(Sub, sub, -);
impl_op!(Mul, mul, *);
impl_op!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops() {
        let a = f32x2::new(1.0, -4.0);
        let b = f32x2::splat(2.0);
        assert_eq!(a + b, f32x2::new(3.0, -2.0));
        assert_eq!(a - b, f32x2::new(-1.0, -6.0));
        assert_eq!(a * b, f32x2::new(2.0, -8.0));
        assert_eq!(a / b, f32x2::new(0.5, -2.0));
    }

    #[test]
    fn min_max() {
        let a = f32x2::new(1.0, -4.0);
        let b = f32x2::new(-1.0, 3.0);
        assert_eq!(a.min(b), f32x2::new(-1.0, -4.0));
        assert_eq!(a.max(b), f32x2::new(1.0, 3.0));
        assert_eq!(a.abs().max_component(), 4.0);
    }
}
