// Copyright 2006 The Android Open Source Project
// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::scalar::ScalarExt;

pub use strict_num::{FiniteF32, NonZeroPositiveF32, NormalizedF32};

pub(crate) const FLOAT_PI: f32 = 3.14159265;

const MAX_I32_FITS_IN_F32: f32 = 2147483520.0;
const MIN_I32_FITS_IN_F32: f32 = -MAX_I32_FITS_IN_F32;

pub trait SaturateCast<T>: Sized {
    fn saturate_from(n: T) -> Self;
}

impl SaturateCast<f32> for i32 {
    /// Return the closest int for the given float.
    ///
    /// Returns MAX_I32_FITS_IN_F32 for NaN.
    #[inline]
    fn saturate_from(mut x: f32) -> Self {
        x = if x < MAX_I32_FITS_IN_F32 { x } else { MAX_I32_FITS_IN_F32 };
        x = if x > MIN_I32_FITS_IN_F32 { x } else { MIN_I32_FITS_IN_F32 };
        x as i32
    }
}

impl SaturateCast<f64> for i32 {
    /// Return the closest int for the given double.
    ///
    /// Returns i32::MAX for NaN.
    #[inline]
    fn saturate_from(mut x: f64) -> Self {
        x = if x < i32::MAX as f64 { x } else { i32::MAX as f64 };
        x = if x > i32::MIN as f64 { x } else { i32::MIN as f64 };
        x as i32
    }
}

pub trait SaturateRound<T>: SaturateCast<T> {
    fn saturate_floor(n: T) -> Self;
    fn saturate_ceil(n: T) -> Self;
    fn saturate_round(n: T) -> Self;
}

impl SaturateRound<f32> for i32 {
    #[inline]
    fn saturate_floor(n: f32) -> Self {
        i32::saturate_from(n.floor())
    }

    #[inline]
    fn saturate_ceil(n: f32) -> Self {
        i32::saturate_from(n.ceil())
    }

    #[inline]
    fn saturate_round(n: f32) -> Self {
        i32::saturate_from(n.round())
    }
}

pub(crate) fn f32_as_2s_compliment(x: f32) -> i32 {
    sign_bit_to_2s_compliment(x.to_bits() as i32)
}

fn sign_bit_to_2s_compliment(mut x: i32) -> i32 {
    if x < 0 {
        x &= 0x7FFFFFFF;
        x = -x;
    }

    x
}

/// An f32 guaranteed to be in a `0..1` range, excluding bounds.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default, Debug)]
#[repr(transparent)]
pub struct NormalizedF32Exclusive(FiniteF32);

impl NormalizedF32Exclusive {
    pub const ANY: Self = Self::HALF;
    pub const HALF: Self = NormalizedF32Exclusive(unsafe { FiniteF32::new_unchecked(0.5) });

    /// Creates a new `NormalizedF32Exclusive`.
    ///
    /// Returns `None` when `n` is not in the `0..1` range, excluding bounds.
    #[inline]
    pub fn new(n: f32) -> Option<Self> {
        if n > 0.0 && n < 1.0 {
            FiniteF32::new(n).map(NormalizedF32Exclusive)
        } else {
            None
        }
    }

    /// Creates a new `NormalizedF32Exclusive` clamping the input value to the `0..1` range.
    #[inline]
    pub fn new_bounded(n: f32) -> Self {
        let n = n.bound(std::f32::EPSILON, 1.0 - std::f32::EPSILON);
        // `new` will never fail, since the value is already bounded.
        Self::new(n).unwrap_or_default()
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0.get()
    }

    #[inline]
    pub fn to_normalized(self) -> NormalizedF32 {
        // Will never fail, because a valid NormalizedF32Exclusive is within NormalizedF32's range.
        NormalizedF32::new(self.get()).unwrap()
    }
}
