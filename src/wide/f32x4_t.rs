// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// Based on https://github.com/Lokathor/wide (Zlib)

use bytemuck::cast;

#[derive(Default, Clone, Copy, PartialEq, Debug)]
#[repr(C, align(16))]
pub struct F32x4([f32; 4]);

unsafe impl bytemuck::Zeroable for F32x4 {}
unsafe impl bytemuck::Pod for F32x4 {}

impl F32x4 {
    pub fn splat(n: f32) -> Self {
        Self::from([n, n, n, n])
    }

    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self([
            self.0[0].max(rhs.0[0]),
            self.0[1].max(rhs.0[1]),
            self.0[2].max(rhs.0[2]),
            self.0[3].max(rhs.0[3]),
        ])
    }

    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self([
            self.0[0].min(rhs.0[0]),
            self.0[1].min(rhs.0[1]),
            self.0[2].min(rhs.0[2]),
            self.0[3].min(rhs.0[3]),
        ])
    }
}

impl From<[f32; 4]> for F32x4 {
    fn from(v: [f32; 4]) -> Self {
        cast(v)
    }
}

impl From<F32x4> for [f32; 4] {
    fn from(v: F32x4) -> Self {
        cast(v)
    }
}

impl std::ops::Add for F32x4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

impl std::ops::AddAssign for F32x4 {
    #[inline]
    fn add_assign(&mut self, rhs: F32x4) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for F32x4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
    }
}

impl std::ops::Mul for F32x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
            self.0[3] * rhs.0[3],
        ])
    }
}

impl std::ops::MulAssign for F32x4 {
    #[inline]
    fn mul_assign(&mut self, rhs: F32x4) {
        *self = *self * rhs;
    }
}
