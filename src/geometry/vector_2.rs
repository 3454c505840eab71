// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::Neg;

use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2<T>
where
    T: Scalar,
{
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Scalar,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product.
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn norm2(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.norm2().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Angle in `[0, 2π)` swept from `-self` to `other`, growing clockwise.
    ///
    /// Evaluates `(π - atan2(self × other, self · other)) mod 2π`: a vector
    /// pointing back along `self` gives 0, a left turn π/2, going straight π
    /// and a right turn 3π/2.
    pub fn angle_to(&self, other: &Self) -> T {
        let two_pi = T::TAU();
        let a = T::PI() - self.cross(other).atan2(self.dot(other));
        if a >= two_pi { a - two_pi } else { a }
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Vector2<T> {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<'a, T: Scalar> Neg for &'a Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Vector2<T> {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
